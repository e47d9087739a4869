//! CLI layer: command definitions, argument parsing, help output and dispatch

pub mod args;
pub mod command;
pub mod commands;
pub mod definition;
pub mod error;
pub mod help;
pub mod parser;
pub mod renderer;
pub mod runner;

pub use args::Cli;
pub use command::{BoundCommand, Command, CommandHandle};
pub use definition::{Definition, ARG_OPTIONAL, ARG_REQUIRED};
pub use error::{CliError, CliResult};
pub use parser::ParseError;
pub use renderer::{RecordingRenderer, RenderEvent, Renderer, TerminalRenderer};
pub use runner::{Context, Runner};
