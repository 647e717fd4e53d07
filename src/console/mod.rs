/// Console core: verbosity, write modes, input, the command registry and
/// the batch runner.
pub mod application;
pub mod batch;
pub mod input;
pub mod verbosity;
pub mod write_mode;

pub use application::Application;
pub use batch::{Batch, CommandHandle, Invocation};
pub use input::Input;
pub use verbosity::Verbosity;
pub use write_mode::WriteMode;
