//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),

    /// A command left its name or description unset during `init`.
    #[error("command {command} must set a name and description in init()")]
    MisconfiguredCommand { command: String },

    #[error("command \"{name}\" is already registered")]
    DuplicateCommand { name: String },

    #[error("{program} exited with status {code}")]
    ExternalCommand { program: String, code: i32 },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::MisconfiguredCommand { .. } | CliError::DuplicateCommand { .. } => {
                crate::exitcode::SOFTWARE
            }
            CliError::ExternalCommand { code, .. } => *code,
            CliError::Infra(e) => match e {
                InfraError::Application(ApplicationError::Config { .. }) => {
                    crate::exitcode::CONFIG
                }
                InfraError::Application(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
