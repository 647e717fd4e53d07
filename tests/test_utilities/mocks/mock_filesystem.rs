use console_kit::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock Filesystem keeping files in memory
///
/// Writes into a directory registered with `with_missing_dir` report
/// `FilesystemError::NotFound`, like a backend whose parent is absent.
#[derive(Default, Clone)]
pub struct MockFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    missing_dirs: Vec<PathBuf>,
    pub write_count: Arc<Mutex<usize>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), contents.as_bytes().to_vec());
        self
    }

    pub fn with_missing_dir(mut self, dir: &str) -> Self {
        self.missing_dirs.push(PathBuf::from(dir));
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(Path::new(path))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn writes(&self) -> usize {
        *self.write_count.lock().unwrap()
    }
}

impl Filesystem for MockFilesystem {
    fn read(&self, path: &Path) -> std::result::Result<Vec<u8>, FilesystemError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FilesystemError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> std::result::Result<(), FilesystemError> {
        if self.missing_dirs.iter().any(|dir| path.starts_with(dir)) {
            return Err(FilesystemError::NotFound(path.to_path_buf()));
        }
        *self.write_count.lock().unwrap() += 1;
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
