//! Application services
//!
//! Concrete services built on the I/O boundary traits (FileSystem, CommandRunner).

mod tools;

pub use tools::ToolService;
