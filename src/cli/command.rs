//! Commands
//!
//! A concrete command implements [`Command`]: it declares its shape in
//! `init` and does its work in `execute`. [`BoundCommand`] pairs a command
//! with its definition and supplies everything else: the built-in `--help`
//! argument, argument parsing, help output and selection.
//!
//! ```ignore
//! struct Greet { name: String }
//!
//! impl Greet {
//!     fn set_name(&mut self, value: &str) { self.name = value.to_string(); }
//! }
//!
//! impl Command for Greet {
//!     fn init(&mut self, def: &mut Definition<Self>) {
//!         def.set_command("greet")
//!             .set_description("Say hello")
//!             .add_primary_arg("name", "Who to greet", ARG_REQUIRED, &["n"])
//!             .add_setter("name", Self::set_name);
//!     }
//!
//!     fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()> {
//!         ctx.renderer.text(&format!("Hello, {}", self.name));
//!         Ok(())
//!     }
//! }
//! ```

use tracing::{debug, trace};

use crate::cli::definition::{setter_name, Definition, ARG_OPTIONAL};
use crate::cli::help::{self, HelpContent};
use crate::cli::parser::{self, ParseError};
use crate::cli::renderer::Renderer;
use crate::cli::runner::Context;
use crate::cli::{CliError, CliResult};

/// A command runnable from the dewdrop CLI.
pub trait Command: Sized {
    /// Declare name, description, aliases, arguments, examples and setters.
    ///
    /// Name and description are mandatory.
    fn init(&mut self, definition: &mut Definition<Self>);

    /// Run the command. Only called after arguments parsed successfully.
    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()>;
}

/// Object-safe view of a bound command, used by the runner.
pub trait CommandHandle {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn is_selected(&self, input: &str) -> bool;

    fn help_content(&self) -> HelpContent;

    fn help(&self, renderer: &mut dyn Renderer);

    fn parse_args(&mut self, input: &[String], renderer: &mut dyn Renderer) -> bool;

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()>;
}

/// A command together with its validated definition.
pub struct BoundCommand<C: Command> {
    command: C,
    definition: Definition<C>,
}

impl<C: Command> std::fmt::Debug for BoundCommand<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundCommand")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

impl<C: Command> BoundCommand<C> {
    /// Register the built-in `help` argument, run the command's `init`, and
    /// check that it named and described itself.
    pub fn new(mut command: C) -> CliResult<Self> {
        let mut definition = Definition::new();

        // All commands support --help
        definition.add_arg(
            "help",
            "Display the help message for this command",
            ARG_OPTIONAL,
            &[],
        );

        command.init(&mut definition);

        let named = definition.name().is_some_and(|name| !name.is_empty());
        let described = definition
            .description()
            .is_some_and(|description| !description.is_empty());
        if !named || !described {
            return Err(CliError::MisconfiguredCommand {
                command: std::any::type_name::<C>().to_string(),
            });
        }

        debug!(
            "bound command {} with {} arguments",
            definition.name().unwrap_or_default(),
            definition.args().len()
        );
        Ok(Self {
            command,
            definition,
        })
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn definition(&self) -> &Definition<C> {
        &self.definition
    }

    /// Parse `input` and deliver every value to its setter.
    ///
    /// Setters run only when the whole input is valid, so a failed parse
    /// leaves the command untouched.
    pub fn try_parse_args(&mut self, input: &[String]) -> Result<(), ParseError> {
        let assignments = parser::parse(&self.definition, input)?;

        for assignment in assignments {
            let setter = self
                .definition
                .setter(&assignment.name)
                .ok_or_else(|| ParseError::MissingSetter {
                    name: assignment.name.clone(),
                })?;
            trace!(
                "{}({:?})",
                setter_name(&assignment.name),
                assignment.value
            );
            setter(&mut self.command, &assignment.value);
        }

        Ok(())
    }

    /// Render `message` as an error followed by the command's help.
    fn abort(&self, message: &str, renderer: &mut dyn Renderer) {
        renderer.error(message);
        self.help(renderer);
    }
}

impl<C: Command> CommandHandle for BoundCommand<C> {
    fn name(&self) -> &str {
        self.definition.name().unwrap_or_default()
    }

    fn description(&self) -> &str {
        self.definition.description().unwrap_or_default()
    }

    fn is_selected(&self, input: &str) -> bool {
        self.definition.is_selected(input)
    }

    fn help_content(&self) -> HelpContent {
        HelpContent::from_definition(&self.definition)
    }

    fn help(&self, renderer: &mut dyn Renderer) {
        help::render(&self.help_content(), renderer);
    }

    /// Parse arguments, reporting problems through `renderer`.
    ///
    /// Returns whether the command may be executed. `--help` renders help and
    /// returns `false`; every other failure renders the error, then help.
    fn parse_args(&mut self, input: &[String], renderer: &mut dyn Renderer) -> bool {
        match self.try_parse_args(input) {
            Ok(()) => true,
            Err(ParseError::HelpRequested) => {
                self.help(renderer);
                false
            }
            Err(e) => {
                debug!("parse failed for {}: {}", self.name(), e);
                self.abort(&e.to_string(), renderer);
                false
            }
        }
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()> {
        self.command.execute(ctx)
    }
}
