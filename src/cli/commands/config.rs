//! `config`: show effective settings or a starter config file

use crate::cli::definition::{Definition, ARG_OPTIONAL};
use crate::cli::runner::Context;
use crate::cli::{CliError, CliResult, Command};
use crate::config::Settings;

#[derive(Debug, Default)]
pub struct ConfigCommand {
    action: Option<String>,
}

impl ConfigCommand {
    fn set_action(&mut self, value: &str) {
        self.action = Some(value.to_lowercase());
    }
}

impl Command for ConfigCommand {
    fn init(&mut self, def: &mut Definition<Self>) {
        def.set_command("config")
            .set_description("Show the effective configuration or print a config template")
            .add_primary_arg("action", "show (default) or template", ARG_OPTIONAL, &[])
            .add_setter("action", Self::set_action)
            .add_example("Show merged settings", "./dewdrop config")
            .add_example(
                "Start a project config",
                "./dewdrop config template > .dewdrop.toml",
            );
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()> {
        let output = match self.action.as_deref().unwrap_or("show") {
            "show" => ctx.services.settings.to_toml()?,
            "template" => Settings::template(),
            other => {
                return Err(CliError::Usage(format!(
                    "Unknown config action \"{other}\", expected show or template"
                )))
            }
        };

        for line in output.lines() {
            ctx.renderer.text(line);
        }
        Ok(())
    }
}
