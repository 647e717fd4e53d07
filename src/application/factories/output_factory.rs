use crate::adapters::outbound::filesystem::LocalFilesystem;
use crate::adapters::outbound::output::{FilesystemOutput, NativeFileOutput, StreamOutput};
use crate::application::dto::OutputTarget;
use crate::console::{Verbosity, WriteMode};
use crate::ports::outbound::Output;
use crate::shared::Result;

/// Factory for creating outputs
///
/// Selects the output adapter for a target and applies the verbosity.
/// The write mode name is resolved before anything is opened, so an
/// invalid name fails for every target and never creates or truncates a
/// file.
pub struct OutputFactory;

impl OutputFactory {
    /// Creates an output for the specified target
    ///
    /// # Arguments
    /// * `target` - Where output should go
    /// * `mode_name` - Raw write mode name (`append` or `reset`)
    /// * `verbosity` - Verbosity applied to the created output
    ///
    /// # Errors
    /// Returns `ConsoleError::InvalidWriteMode` for an unknown mode name,
    /// whatever the target, or the sink's open error.
    ///
    /// # Examples
    /// ```
    /// use console_kit::application::dto::OutputTarget;
    /// use console_kit::application::factories::OutputFactory;
    /// use console_kit::console::Verbosity;
    ///
    /// let output =
    ///     OutputFactory::create(&OutputTarget::Stdout, "append", Verbosity::Normal).unwrap();
    /// ```
    pub fn create(
        target: &OutputTarget,
        mode_name: &str,
        verbosity: Verbosity,
    ) -> Result<Box<dyn Output>> {
        let mode = WriteMode::resolve(mode_name)?;
        let mut output: Box<dyn Output> = match target {
            OutputTarget::Stdout => Box::new(StreamOutput::stdout()),
            OutputTarget::File(path) => Box::new(NativeFileOutput::open(path.clone(), mode)?),
            OutputTarget::Filesystem { root, path } => {
                let filesystem = LocalFilesystem::new(root.clone());
                Box::new(FilesystemOutput::open(filesystem, path.clone(), mode)?)
            }
        };

        output.set_verbosity(verbosity);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ConsoleError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_create_stdout_output() {
        let output =
            OutputFactory::create(&OutputTarget::Stdout, "reset", Verbosity::Verbose).unwrap();
        assert_eq!(output.verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_create_file_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.log");

        let mut output =
            OutputFactory::create(&OutputTarget::File(path.clone()), "reset", Verbosity::Normal)
                .unwrap();
        output.writeln("written").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "written\n");
    }

    #[test]
    fn test_create_filesystem_output() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("out.log"), "kept\n").unwrap();
        let target = OutputTarget::Filesystem {
            root: temp_dir.path().to_path_buf(),
            path: PathBuf::from("out.log"),
        };

        let mut output = OutputFactory::create(&target, "append", Verbosity::Normal).unwrap();
        output.writeln("added").unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("out.log")).unwrap(),
            "kept\nadded\n"
        );
    }

    #[test]
    fn test_invalid_mode_creates_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.log");

        let target = OutputTarget::File(path.clone());
        let result = OutputFactory::create(&target, "bogus", Verbosity::Normal);
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ConsoleError>(),
            Some(ConsoleError::InvalidWriteMode { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_mode_rejected_for_stdout() {
        let result = OutputFactory::create(&OutputTarget::Stdout, "sideways", Verbosity::Normal);
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ConsoleError>(),
            Some(ConsoleError::InvalidWriteMode { mode }) if mode == "sideways"
        ));
    }
}
