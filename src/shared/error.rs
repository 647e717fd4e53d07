use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A successful run exits with the batch's aggregated return code instead;
/// these values cover the cases where the batch never completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every command ran and the aggregate code is zero
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unknown command, malformed entry, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the output sinks and the batch runner.
///
/// All of them are raised at the point of detection and propagate
/// unchanged; nothing in the crate recovers from them.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to open file for writing: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FailedToOpenFileForWriting { path: PathBuf, details: String },

    #[error("Invalid write mode: '{mode}'\n\n💡 Hint: Use 'append' to keep existing content or 'reset' to truncate the file")]
    InvalidWriteMode { mode: String },

    #[error("Batch entry must be a command signature string, got {found}")]
    BatchSignatureExpected { found: String },

    #[error("Command entry must contain exactly the keys [\"command\", \"input\"] in that order, got [{keys}]")]
    CommandArrayFormatMismatch { keys: String },

    #[error("Input must not be null for command '{command}'")]
    InputMustNotBeNull { command: String },

    #[error("Command \"{name}\" is not defined.\n\n💡 Hint: Available commands: {available}")]
    CommandNotFound { name: String, available: String },

    #[error("Unable to parse input near '{near}' in \"{signature}\"")]
    MalformedSignature { signature: String, near: String },

    #[error("Invalid verbosity: '{value}'. Please specify one of quiet, normal, verbose, very-verbose, debug")]
    InvalidVerbosity { value: String },
}
