use crate::adapters::outbound::output::BufferedOutput;
use crate::application::dto::{BatchRequest, BatchResponse};
use crate::application::factories::OutputFactory;
use crate::console::{Application, Batch};
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use anyhow::Context;

/// RunBatchUseCase - Runs a batch of commands against an application
///
/// Opens the requested output, enqueues every entry (resolving each to a
/// registered command), then runs the batch.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation (`()` for none)
pub struct RunBatchUseCase<'app, PR> {
    application: &'app Application,
    progress_reporter: PR,
}

impl<'app, PR> RunBatchUseCase<'app, PR>
where
    PR: ProgressReporter,
{
    /// Creates a new RunBatchUseCase with injected dependencies
    pub fn new(application: &'app Application, progress_reporter: PR) -> Self {
        Self {
            application,
            progress_reporter,
        }
    }

    /// Executes the batch described by `request`
    ///
    /// Every entry is resolved before the output is opened, so a rejected
    /// entry leaves an existing output file untouched.
    ///
    /// # Errors
    /// Returns the first error met: enqueueing an entry (no command runs in
    /// that case), opening the output, or a command failing mid-run.
    pub fn execute(&self, request: BatchRequest) -> Result<BatchResponse> {
        let mut pending = Batch::new(self.application, BufferedOutput::new());
        for (index, entry) in request.entries.iter().enumerate() {
            pending
                .add_value(entry)
                .with_context(|| format!("Invalid batch entry #{}", index + 1))?;
        }

        let output =
            OutputFactory::create(&request.target, &request.mode_name, request.verbosity)?;
        tracing::debug!(output = %request.target, verbosity = %request.verbosity, "output ready");
        let mut batch = pending.with_output(output);

        let commands_run = batch.len();
        self.progress_reporter.report(&format!(
            "🚀 Running {} command(s) from {}",
            commands_run,
            self.application.name()
        ));

        let return_code = batch.run_with_progress(&self.progress_reporter)?;
        Ok(BatchResponse::new(return_code, commands_run))
    }
}
