use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reported by a [`Filesystem`] implementation.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Path escapes the filesystem root: {0}")]
    PathOutsideRoot(PathBuf),

    #[error("Security: {0} is a symbolic link. For security reasons, symbolic links are not allowed.")]
    SymlinkRejected(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilesystemError {
    /// Wraps an I/O error, mapping `NotFound` to [`FilesystemError::NotFound`].
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FilesystemError::NotFound(path.to_path_buf())
        } else {
            FilesystemError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Filesystem port: a storage abstraction that persists whole files.
///
/// Paths are interpreted by the implementation (e.g. relative to a root).
pub trait Filesystem {
    /// Reads the full content of a file
    ///
    /// # Errors
    /// Returns `FilesystemError::NotFound` if the file does not exist
    fn read(&self, path: &Path) -> Result<Vec<u8>, FilesystemError>;

    /// Creates or replaces a file with the given content
    ///
    /// # Errors
    /// Returns `FilesystemError::NotFound` if the parent location does not
    /// exist, or another variant if the write itself fails
    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), FilesystemError>;

    fn exists(&self, path: &Path) -> bool;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FilesystemError> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), FilesystemError> {
        (**self).write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<F: Filesystem + ?Sized> Filesystem for Box<F> {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FilesystemError> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), FilesystemError> {
        (**self).write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
