/// Filesystem adapters for the storage port
mod local_filesystem;

pub use local_filesystem::LocalFilesystem;
