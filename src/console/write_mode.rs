use crate::shared::error::ConsoleError;
use std::fs::OpenOptions;

/// Policy for opening the target file of an output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Keep existing content and append to it, creating the file if needed
    #[default]
    Append,
    /// Truncate existing content, creating the file if needed
    Reset,
}

impl WriteMode {
    /// Resolves a raw mode name into a write mode.
    ///
    /// This is the only place an unknown mode is detected, so callers that
    /// accept a mode name resolve it before opening anything.
    ///
    /// # Errors
    /// Returns `ConsoleError::InvalidWriteMode` for anything other than
    /// `append` / `reset` (or their `a+` / `w+` open-mode spellings).
    pub fn resolve(name: &str) -> Result<Self, ConsoleError> {
        match name.trim().to_lowercase().as_str() {
            "append" | "a+" => Ok(WriteMode::Append),
            "reset" | "w+" => Ok(WriteMode::Reset),
            _ => Err(ConsoleError::InvalidWriteMode {
                mode: name.to_string(),
            }),
        }
    }

    /// The C-style open mode string this policy corresponds to.
    pub fn open_mode(&self) -> &'static str {
        match self {
            WriteMode::Append => "a+",
            WriteMode::Reset => "w+",
        }
    }

    /// Native open options: read/write, create, and either append or truncate.
    pub fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(true).create(true);
        match self {
            WriteMode::Append => {
                options.append(true);
            }
            WriteMode::Reset => {
                options.write(true).truncate(true);
            }
        }
        options
    }
}

impl std::str::FromStr for WriteMode {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WriteMode::resolve(s)
    }
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Append => write!(f, "append"),
            WriteMode::Reset => write!(f, "reset"),
        }
    }
}
