use crate::ports::outbound::{Filesystem, FilesystemError};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// LocalFilesystem adapter storing files under a root directory
///
/// Paths handed to it are relative to the root. Absolute paths, `..`
/// components and symbolic links anywhere below the root are refused.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, FilesystemError> {
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.as_os_str().is_empty() {
            return Err(FilesystemError::PathOutsideRoot(path.to_path_buf()));
        }
        Ok(self.root.join(path))
    }

    /// Rejects a path whose target or any intermediate directory below the
    /// root is a symbolic link.
    fn reject_symlink(&self, path: &Path) -> Result<(), FilesystemError> {
        let mut current = self.root.clone();
        for component in path.components() {
            current.push(component);
            match fs::symlink_metadata(&current) {
                Ok(metadata) if metadata.is_symlink() => {
                    return Err(FilesystemError::SymlinkRejected(path.to_path_buf()))
                }
                Ok(_) => {}
                // Nothing below a missing component exists either
                Err(_) => break,
            }
        }
        Ok(())
    }
}

impl Filesystem for LocalFilesystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FilesystemError> {
        let full_path = self.resolve(path)?;
        self.reject_symlink(path)?;
        fs::read(&full_path).map_err(|e| FilesystemError::from_io(path, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), FilesystemError> {
        let full_path = self.resolve(path)?;
        self.reject_symlink(path)?;
        fs::write(&full_path, contents).map_err(|e| FilesystemError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path)
            .is_ok_and(|full_path| self.reject_symlink(path).is_ok() && full_path.exists())
    }
}
