//! Application layer: services commands call into
//!
//! Services here depend on I/O boundary traits, never on concrete I/O.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
