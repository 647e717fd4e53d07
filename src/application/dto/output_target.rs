use std::path::PathBuf;

/// Where a batch's console output goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output (default)
    #[default]
    Stdout,
    /// A file opened through a native handle
    File(PathBuf),
    /// A file persisted through the local filesystem adapter
    Filesystem {
        /// Directory every path is resolved under
        root: PathBuf,
        /// Target path, relative to `root`
        path: PathBuf,
    },
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "stdout"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Filesystem { root, path } => {
                write!(f, "{}", root.join(path).display())
            }
        }
    }
}
