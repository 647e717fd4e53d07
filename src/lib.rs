//! console-kit - console output sinks and a command batch runner
//!
//! This library extends a small console-application model with file-backed
//! output sinks and a utility that runs a sequence of named commands within
//! one application run, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Console core** (`console`): verbosity, write modes, input parsing, the
//!   command registry and the batch runner
//! - **Application Layer** (`application`): Use cases, factories and DTOs
//! - **Ports** (`ports`): `Command`, `Output`, `Filesystem` and
//!   `ProgressReporter` interfaces
//! - **Adapters** (`adapters`): Built-in commands and concrete outputs
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use console_kit::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut application = Application::new("demo");
//! application.register(EchoCommand).register(ExitCommand);
//!
//! let output = NativeFileOutput::open("console.log", WriteMode::Append)?;
//! let mut batch = Batch::new(&application, output);
//! batch.add("echo hello world")?;
//! batch.add("exit 0")?;
//!
//! let return_code = batch.run()?;
//! println!("batch finished with {}", return_code);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod console;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::commands::{EchoCommand, ExitCommand};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::LocalFilesystem;
    pub use crate::adapters::outbound::output::{
        BufferedOutput, FilesystemOutput, NativeFileOutput, StreamOutput,
    };
    pub use crate::application::dto::{BatchRequest, BatchResponse, OutputTarget};
    pub use crate::application::factories::OutputFactory;
    pub use crate::application::use_cases::RunBatchUseCase;
    pub use crate::console::{Application, Batch, Input, Invocation, Verbosity, WriteMode};
    pub use crate::ports::inbound::Command;
    pub use crate::ports::outbound::{Filesystem, FilesystemError, Output, ProgressReporter};
    pub use crate::shared::error::ConsoleError;
    pub use crate::shared::Result;
}
