//! CLI-level errors (wraps application errors)

use std::error::Error as _;
use std::io;

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { source, .. } => {
                    if source.is::<io::Error>() {
                        crate::exitcode::IOERR
                    } else {
                        crate::exitcode::SOFTWARE
                    }
                }
            },
        }
    }

    /// The reader of stdout went away (e.g. `patternlab | head -1`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            CliError::Application(ApplicationError::OperationFailed { source, .. }) => source
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe),
            CliError::Application(_) => false,
        }
    }

    /// The error and every underlying cause, joined with `": "`.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut cause = self.source();
        // `Application` is transparent, so its own message is already printed
        if let Some(inner) = cause {
            if inner.to_string() == message {
                cause = inner.source();
            }
        }
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}
