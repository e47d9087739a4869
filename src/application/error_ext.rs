//! Error conversion helpers for I/O operations
//!
//! Provides extension traits for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context naming the action and its subject to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// self.cmd.passthru(program, &args, None)
    ///     .with_context("run", program)?;
    /// ```
    fn with_context(self, action: &str, subject: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str, subject: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{action}: {subject}"),
            source: Box::new(e),
        })
    }
}
