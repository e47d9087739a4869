//! Help content
//!
//! [`HelpContent`] is a command's definition minus its setters, so help can be
//! rendered for any registered command without touching the command itself.

use crate::cli::definition::{matches_name, ArgDef, Definition, Example};
use crate::cli::renderer::Renderer;

/// Everything help output needs to describe one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContent {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub examples: Vec<Example>,
    pub args: Vec<ArgDef>,
}

impl HelpContent {
    pub fn from_definition<C>(definition: &Definition<C>) -> Self {
        Self {
            name: definition.name().unwrap_or_default().to_string(),
            description: definition.description().unwrap_or_default().to_string(),
            aliases: definition.aliases().to_vec(),
            examples: definition.examples().to_vec(),
            args: definition.args().to_vec(),
        }
    }

    /// Whether `input` names this command or one of its aliases, ignoring case.
    pub fn is_selected(&self, input: &str) -> bool {
        matches_name(&self.name, &self.aliases, input)
    }

    /// Argument table rows: `--name` to `description (Required|Optional)`.
    pub fn arg_rows(&self) -> Vec<(String, String)> {
        self.args
            .iter()
            .map(|arg| {
                let status = if arg.required { "Required" } else { "Optional" };
                (
                    format!("--{}", arg.name),
                    format!("{} ({})", arg.description, status),
                )
            })
            .collect()
    }
}

/// Render a command's help.
///
/// Name and description, aliases if any, examples if any, then the argument
/// table.
pub fn render(help: &HelpContent, renderer: &mut dyn Renderer) {
    renderer.title(&help.name);
    renderer.text(&help.description);

    if !help.aliases.is_empty() {
        renderer.text(&format!("Aliases: {}", help.aliases.join(", ")));
    }

    renderer.newline();

    if !help.examples.is_empty() {
        renderer.subhead("Examples");

        for example in &help.examples {
            renderer.text(&format!("{}:", example.description.trim_end_matches(':')));
            renderer.text(&format!("    {}", example.command));
            renderer.newline();
        }
    }

    if !help.args.is_empty() {
        renderer.subhead("Arguments");
        renderer.table(&help.arg_rows());
    }
}

/// Render the list of available commands with their descriptions.
pub fn render_listing(program: &str, commands: &[HelpContent], renderer: &mut dyn Renderer) {
    renderer.title("Available Commands");
    renderer.text(&format!("Usage: {program} <command> [arguments]"));
    renderer.newline();

    let rows: Vec<(String, String)> = commands
        .iter()
        .map(|command| (command.name.clone(), command.description.clone()))
        .collect();
    renderer.table(&rows);

    renderer.text(&format!(
        "Run \"{program} help <command>\" for details on a command."
    ));
}
