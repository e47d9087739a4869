//! Process-level argument definitions using clap
//!
//! clap only handles the global options in front of the command name.
//! Everything from the command name on is handed untouched to the selected
//! command's own parser.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command runner for the Dewdrop admin scaffolding framework
#[derive(Parser, Debug)]
#[command(name = "dewdrop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Project directory holding .dewdrop.toml (default: cwd)
    #[arg(short = 'C', long)]
    pub project_dir: Option<PathBuf>,

    /// Command name followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub argv: Vec<String>,
}

impl Cli {
    /// Selected command name, if any.
    pub fn command_name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Tokens following the command name.
    pub fn command_args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_global_flags_before_command_when_parsed_then_split_from_command_args() {
        let cli = Cli::try_parse_from(["dewdrop", "-dd", "--no-color", "run", "phpunit", "--dir=~/x"])
            .expect("parse");

        assert_eq!(cli.debug, 2);
        assert!(cli.no_color);
        assert_eq!(cli.command_name(), Some("run"));
        assert_eq!(cli.command_args(), &["phpunit".to_string(), "--dir=~/x".to_string()]);
    }

    #[test]
    fn given_help_after_command_when_parsed_then_passed_to_command() {
        let cli = Cli::try_parse_from(["dewdrop", "run", "--help"]).expect("parse");

        assert_eq!(cli.command_name(), Some("run"));
        assert_eq!(cli.command_args(), &["--help".to_string()]);
    }

    #[test]
    fn given_no_command_when_parsed_then_command_is_none() {
        let cli = Cli::try_parse_from(["dewdrop"]).expect("parse");

        assert_eq!(cli.command_name(), None);
        assert!(cli.command_args().is_empty());
    }
}
