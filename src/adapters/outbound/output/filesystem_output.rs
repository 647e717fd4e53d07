use crate::console::{Verbosity, WriteMode};
use crate::ports::outbound::{Filesystem, FilesystemError, Output};
use crate::shared::error::ConsoleError;
use crate::shared::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// FilesystemOutput adapter persisting console output through a [`Filesystem`]
///
/// Output accumulates in an anonymous temporary file; after every write the
/// whole buffer is handed to the filesystem, so the target always holds the
/// complete output so far.
///
/// Each write re-sends everything written so far, so the bytes transferred
/// grow quadratically with the length of the output. Prefer
/// [`NativeFileOutput`](super::NativeFileOutput) for long-running batches.
pub struct FilesystemOutput<F: Filesystem> {
    filesystem: F,
    path: PathBuf,
    mode: WriteMode,
    buffer: File,
    verbosity: Verbosity,
}

impl<F: Filesystem> FilesystemOutput<F> {
    /// Opens `path` on `filesystem` with the given mode.
    ///
    /// In append mode the buffer starts with the file's current content
    /// (nothing if it does not exist yet); in reset mode it starts empty.
    /// The target is written once here, so it exists (or is truncated)
    /// even if nothing is ever printed.
    ///
    /// # Errors
    /// Returns `ConsoleError::FailedToOpenFileForWriting` if the buffer
    /// cannot be created or the filesystem reports the target as not found.
    pub fn open(filesystem: F, path: impl Into<PathBuf>, mode: WriteMode) -> Result<Self> {
        let path = path.into();
        let mut buffer =
            tempfile::tempfile().map_err(|e| ConsoleError::FailedToOpenFileForWriting {
                path: path.clone(),
                details: format!("Failed to create temporary buffer: {}", e),
            })?;

        if mode == WriteMode::Append {
            match filesystem.read(&path) {
                Ok(existing) => buffer
                    .write_all(&existing)
                    .context("Failed to seed output buffer")?,
                Err(FilesystemError::NotFound(_)) => {}
                Err(e) => return Err(translate(&path, e)),
            }
        }

        let mut output = Self {
            filesystem,
            path,
            mode,
            buffer,
            verbosity: Verbosity::Normal,
        };
        output.forward()?;

        tracing::debug!(
            path = %output.path.display(),
            mode = mode.open_mode(),
            "opened filesystem output"
        );
        Ok(output)
    }

    /// Resolves `mode_name` and then opens `path`.
    ///
    /// # Errors
    /// Returns `ConsoleError::InvalidWriteMode` for an unknown mode, before
    /// the buffer or the filesystem is touched.
    pub fn open_with_mode_name(
        filesystem: F,
        path: impl Into<PathBuf>,
        mode_name: &str,
    ) -> Result<Self> {
        let mode = WriteMode::resolve(mode_name)?;
        Self::open(filesystem, path, mode)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Sends the whole buffer to the filesystem, leaving the cursor at the end.
    ///
    /// Costs one full read of the buffer and one full filesystem write.
    fn forward(&mut self) -> Result<()> {
        let mut contents = Vec::new();
        self.buffer
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.buffer.read_to_end(&mut contents))
            .context("Failed to read output buffer")?;

        self.filesystem
            .write(&self.path, &contents)
            .map_err(|e| translate(&self.path, e))
    }
}

impl<F: Filesystem> Output for FilesystemOutput<F> {
    fn do_write(&mut self, message: &str, newline: bool) -> Result<()> {
        self.buffer
            .write_all(message.as_bytes())
            .context("Failed to write to output buffer")?;
        if newline {
            self.buffer
                .write_all(b"\n")
                .context("Failed to write to output buffer")?;
        }
        self.forward()
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }
}

/// "Not found" becomes a failed open; anything else propagates as is.
fn translate(path: &Path, error: FilesystemError) -> anyhow::Error {
    match error {
        FilesystemError::NotFound(_) => ConsoleError::FailedToOpenFileForWriting {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
        .into(),
        other => other.into(),
    }
}
