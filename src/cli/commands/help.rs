//! `help`: list commands, or show one command's help

use crate::cli::definition::{Definition, ARG_OPTIONAL};
use crate::cli::help;
use crate::cli::runner::Context;
use crate::cli::{CliError, CliResult, Command};

#[derive(Debug, Default)]
pub struct HelpCommand {
    command: Option<String>,
}

impl HelpCommand {
    fn set_command(&mut self, value: &str) {
        self.command = Some(value.to_string());
    }
}

impl Command for HelpCommand {
    fn init(&mut self, def: &mut Definition<Self>) {
        def.set_command("help")
            .set_description("Display help for a command or list all available commands")
            .add_primary_arg("command", "The command to describe", ARG_OPTIONAL, &["c"])
            .add_setter("command", Self::set_command)
            .add_example("List all available commands", "./dewdrop help")
            .add_example("Show the arguments accepted by the run command", "./dewdrop help run");
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()> {
        match self.command.as_deref() {
            None => {
                help::render_listing(ctx.program, ctx.catalog, &mut *ctx.renderer);
                Ok(())
            }
            Some(name) => {
                let content = ctx
                    .find_command(name)
                    .ok_or_else(|| CliError::Usage(format!("Could not find command \"{name}\"")))?;
                help::render(content, &mut *ctx.renderer);
                Ok(())
            }
        }
    }
}
