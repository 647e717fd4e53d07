use crate::console::{Verbosity, WriteMode};
use crate::ports::outbound::Output;
use crate::shared::error::ConsoleError;
use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// NativeFileOutput adapter writing console output through a native file handle
///
/// The file is opened once, with `a+` or `w+` semantics depending on the
/// write mode, and closed when the output is dropped.
#[derive(Debug)]
pub struct NativeFileOutput {
    path: PathBuf,
    mode: WriteMode,
    file: File,
    verbosity: Verbosity,
}

impl NativeFileOutput {
    /// Opens `path` for writing with the given mode.
    ///
    /// # Errors
    /// Returns `ConsoleError::FailedToOpenFileForWriting` if the file cannot
    /// be opened or created.
    pub fn open(path: impl Into<PathBuf>, mode: WriteMode) -> Result<Self, ConsoleError> {
        let path = path.into();
        let file = mode.open_options().open(&path).map_err(|e| {
            ConsoleError::FailedToOpenFileForWriting {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        tracing::debug!(
            path = %path.display(),
            mode = mode.open_mode(),
            "opened native file output"
        );
        Ok(Self {
            path,
            mode,
            file,
            verbosity: Verbosity::Normal,
        })
    }

    /// Resolves `mode_name` and then opens `path`.
    ///
    /// # Errors
    /// Returns `ConsoleError::InvalidWriteMode` for an unknown mode, before
    /// the file is touched; otherwise as [`NativeFileOutput::open`].
    pub fn open_with_mode_name(
        path: impl Into<PathBuf>,
        mode_name: &str,
    ) -> Result<Self, ConsoleError> {
        let mode = WriteMode::resolve(mode_name)?;
        Self::open(path, mode)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }
}

impl Output for NativeFileOutput {
    fn do_write(&mut self, message: &str, newline: bool) -> crate::shared::Result<()> {
        let mut bytes = Vec::with_capacity(message.len() + 1);
        bytes.extend_from_slice(message.as_bytes());
        if newline {
            bytes.push(b'\n');
        }
        self.file
            .write_all(&bytes)
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        Ok(())
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_mode_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("console.log");
        fs::write(&path, "existing\n").unwrap();

        let mut output = NativeFileOutput::open(&path, WriteMode::Append).unwrap();
        output.writeln("appended").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nappended\n");
    }

    #[test]
    fn test_reset_mode_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("console.log");
        fs::write(&path, "existing\n").unwrap();

        let output = NativeFileOutput::open(&path, WriteMode::Reset).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert_eq!(output.mode(), WriteMode::Reset);
    }

    #[test]
    fn test_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("new.log");

        let mut output = NativeFileOutput::open(&path, WriteMode::Append).unwrap();
        output.write("no newline", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "no newline");
        assert_eq!(output.path(), path.as_path());
    }

    #[test]
    fn test_invalid_mode_name_opens_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("never.log");

        let result = NativeFileOutput::open_with_mode_name(&path, "sideways");
        assert!(matches!(result, Err(ConsoleError::InvalidWriteMode { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_fails_to_open() {
        let path = PathBuf::from("/nonexistent/directory/console.log");

        let result = NativeFileOutput::open(&path, WriteMode::Append);
        assert!(matches!(
            result,
            Err(ConsoleError::FailedToOpenFileForWriting { ref path, .. })
                if path == Path::new("/nonexistent/directory/console.log")
        ));
    }

    #[test]
    fn test_quiet_output_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quiet.log");

        let mut output = NativeFileOutput::open_with_mode_name(&path, "reset").unwrap();
        output.set_verbosity(Verbosity::Quiet);
        output.writeln("hidden").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
