//! Built-in commands

mod config;
mod help;
mod run;

pub use config::ConfigCommand;
pub use help::HelpCommand;
pub use run::RunCommand;

use crate::cli::renderer::Renderer;
use crate::cli::runner::Runner;
use crate::cli::CliResult;

/// Register every built-in command with `runner`.
pub fn register_builtin<R: Renderer>(runner: &mut Runner<R>) -> CliResult<()> {
    runner
        .register(HelpCommand::default())?
        .register(RunCommand::default())?
        .register(ConfigCommand::default())?;
    Ok(())
}
