//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;
use std::process::Output;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments, capturing its output.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;

    /// Run a command attached to the current stdin/stdout/stderr.
    ///
    /// Blocks until the command exits and returns its exit status.
    fn passthru(&self, cmd: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<i32>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }

    fn passthru(&self, cmd: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<i32> {
        let mut command = std::process::Command::new(cmd);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let status = command.status()?;

        // Killed by a signal: no code, report as a software failure
        Ok(status.code().unwrap_or(crate::exitcode::SOFTWARE))
    }
}
