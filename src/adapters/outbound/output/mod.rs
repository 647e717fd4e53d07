/// Output adapters: stream, in-memory and file-backed sinks
mod filesystem_output;
mod native_file_output;
mod stream_output;

pub use filesystem_output::FilesystemOutput;
pub use native_file_output::NativeFileOutput;
pub use stream_output::{BufferedOutput, StreamOutput};
