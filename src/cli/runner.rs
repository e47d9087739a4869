//! Command dispatch
//!
//! The [`Runner`] owns every registered command, selects the one named on the
//! command line, lets it parse its arguments and executes it, translating the
//! outcome into a process exit code.

use std::iter;

use tracing::{debug, info, instrument};

use crate::cli::command::{BoundCommand, Command, CommandHandle};
use crate::cli::help::{self, HelpContent};
use crate::cli::renderer::Renderer;
use crate::cli::{CliError, CliResult};
use crate::exitcode;
use crate::infrastructure::ServiceContainer;

/// Command run when no command name is given.
pub const DEFAULT_COMMAND: &str = "help";

/// What a command can reach while executing.
pub struct Context<'a> {
    /// All command output goes here
    pub renderer: &'a mut dyn Renderer,
    pub services: &'a ServiceContainer,
    /// Help content of every registered command, in registration order
    pub catalog: &'a [HelpContent],
    /// Program name used in usage lines
    pub program: &'a str,
}

impl<'a> Context<'a> {
    /// Help content of the command selected by `name` or one of its aliases.
    pub fn find_command(&self, name: &str) -> Option<&'a HelpContent> {
        self.catalog.iter().find(|content| content.is_selected(name))
    }
}

/// Registry and dispatcher for commands.
pub struct Runner<R: Renderer> {
    program: String,
    renderer: R,
    services: ServiceContainer,
    commands: Vec<Box<dyn CommandHandle>>,
    catalog: Vec<HelpContent>,
}

impl<R: Renderer> Runner<R> {
    pub fn new(renderer: R, services: ServiceContainer) -> Self {
        Self {
            program: "dewdrop".to_string(),
            renderer,
            services,
            commands: Vec::new(),
            catalog: Vec::new(),
        }
    }

    /// Override the program name shown in usage lines.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Bind and register a command.
    ///
    /// Fails if the command is misconfigured or if its name or one of its
    /// aliases already selects a registered command.
    pub fn register<C: Command + 'static>(&mut self, command: C) -> CliResult<&mut Self> {
        let bound = BoundCommand::new(command)?;
        let content = bound.help_content();

        for name in iter::once(&content.name).chain(&content.aliases) {
            if self.commands.iter().any(|existing| existing.is_selected(name)) {
                return Err(CliError::DuplicateCommand { name: name.clone() });
            }
        }

        debug!("registered command {}", content.name);
        self.catalog.push(content);
        self.commands.push(Box::new(bound));
        Ok(self)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn services(&self) -> &ServiceContainer {
        &self.services
    }

    /// Help content of every registered command, in registration order.
    pub fn catalog(&self) -> &[HelpContent] {
        &self.catalog
    }

    /// Select, parse and execute a command.
    ///
    /// `command` is the command name (or alias) from the command line; `None`
    /// runs [`DEFAULT_COMMAND`]. `args` are the tokens following it.
    /// Returns the process exit code.
    #[instrument(skip(self))]
    pub fn run(&mut self, command: Option<&str>, args: &[String]) -> i32 {
        let input = command.unwrap_or(DEFAULT_COMMAND);

        let Some(index) = self
            .commands
            .iter()
            .position(|handle| handle.is_selected(input))
        else {
            self.renderer
                .error(&format!("Could not find command \"{input}\""));
            help::render_listing(&self.program, &self.catalog, &mut self.renderer);
            return exitcode::USAGE;
        };

        let handle = &mut self.commands[index];
        info!("selected command {}", handle.name());

        if !handle.parse_args(args, &mut self.renderer) {
            return exitcode::USAGE;
        }

        let mut ctx = Context {
            renderer: &mut self.renderer,
            services: &self.services,
            catalog: &self.catalog,
            program: &self.program,
        };

        match handle.execute(&mut ctx) {
            Ok(()) => exitcode::OK,
            Err(e) => {
                debug!("command {} failed: {:?}", handle.name(), e);
                ctx.renderer.error(&e.to_string());
                e.exit_code()
            }
        }
    }
}
