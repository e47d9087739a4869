//! `run`: run an external tool through passthru

use std::path::PathBuf;

use tracing::info;

use crate::cli::definition::{Definition, ARG_OPTIONAL, ARG_REQUIRED};
use crate::cli::runner::Context;
use crate::cli::{CliError, CliResult, Command};

#[derive(Debug, Default)]
pub struct RunCommand {
    tool: String,
    working_dir: Option<String>,
    args: Vec<String>,
}

impl RunCommand {
    fn set_tool(&mut self, value: &str) {
        self.tool = value.to_string();
    }

    fn set_working_dir(&mut self, value: &str) {
        self.working_dir = Some(value.to_string());
    }

    fn set_args(&mut self, value: &str) {
        self.args = value.split_whitespace().map(str::to_string).collect();
    }
}

impl Command for RunCommand {
    fn init(&mut self, def: &mut Definition<Self>) {
        def.set_command("run")
            .add_alias("exec")
            .set_description("Run an external tool, resolving its executable and working directory")
            .add_primary_arg("tool", "Name of the tool to run", ARG_REQUIRED, &["t"])
            .add_arg(
                "working-dir",
                "Directory to run the tool in, \"~\" is expanded",
                ARG_OPTIONAL,
                &["dir", "d"],
            )
            .add_arg(
                "args",
                "Arguments passed to the tool, separated by spaces",
                ARG_OPTIONAL,
                &["a"],
            )
            .add_setter("tool", Self::set_tool)
            .add_setter("working-dir", Self::set_working_dir)
            .add_setter("args", Self::set_args)
            .add_example(
                "Run phpunit inside a project",
                "./dewdrop run phpunit --dir=~/projects/site",
            )
            .add_example(
                "Pass arguments through to the tool",
                "./dewdrop run --tool=phpcs --args=\"--standard=PSR2 src\"",
            );
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()> {
        let tools = &ctx.services.tools;

        let program = tools.auto_detect_executable(&self.tool);
        if program == self.tool {
            ctx.renderer.warning(&format!(
                "Could not locate {}, relying on PATH",
                self.tool
            ));
        }
        let cwd: Option<PathBuf> = self
            .working_dir
            .as_deref()
            .map(|dir| tools.eval_path_argument(dir));

        if let Some(dir) = &cwd {
            if !ctx.services.fs.exists(dir) {
                return Err(CliError::InvalidArgs(format!(
                    "working directory {} does not exist",
                    dir.display()
                )));
            }
        }

        info!("running {} {:?} in {:?}", program, self.args, cwd);
        let status = tools.passthru(&program, &self.args, cwd.as_deref())?;

        if status != 0 {
            return Err(CliError::ExternalCommand {
                program,
                code: status,
            });
        }
        ctx.renderer.success(&format!("{} finished", self.tool));
        Ok(())
    }
}
