/// Mock implementations for testing
mod mock_command;
mod mock_filesystem;
mod mock_progress_reporter;

pub use mock_command::{FailingCommand, MockCommand};
pub use mock_filesystem::MockFilesystem;
pub use mock_progress_reporter::MockProgressReporter;
