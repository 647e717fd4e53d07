/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the console core uses to reach
/// output destinations, storage and the user's terminal.
pub mod filesystem;
pub mod output;
pub mod progress_reporter;

pub use filesystem::{Filesystem, FilesystemError};
pub use output::Output;
pub use progress_reporter::ProgressReporter;
