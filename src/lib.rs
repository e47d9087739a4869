//! Dewdrop command runner.
//!
//! Layers, from the inside out:
//! - `application`: helper services commands use (paths, executables, passthru)
//! - `infrastructure`: I/O boundary traits and the service container
//! - `cli`: command definitions, argument parsing, help rendering and dispatch
//!
//! A command declares its shape in [`cli::Command::init`], is bound into a
//! [`cli::BoundCommand`], and is dispatched by a [`cli::Runner`].

pub mod application;
pub mod cli;
pub mod config;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use cli::{CliError, CliResult};
