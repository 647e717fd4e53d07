/// ProgressReporter port for reporting batch progress
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// feedback about the batch never mixes with the batch's own output.
pub trait ProgressReporter {
    /// Reports a free-form progress message
    fn report(&self, message: &str);

    /// Reports that a command is about to run
    ///
    /// # Arguments
    /// * `index` - Zero-based position of the command in the batch
    /// * `total` - Number of commands in the batch
    /// * `name` - Name of the command being run
    fn report_command(&self, index: usize, total: usize, name: &str);

    /// Reports completion of the batch with its aggregated return code
    fn report_completion(&self, return_code: i32);
}

/// Silent reporter, used when no feedback is wanted.
impl ProgressReporter for () {
    fn report(&self, _message: &str) {}

    fn report_command(&self, _index: usize, _total: usize, _name: &str) {}

    fn report_completion(&self, _return_code: i32) {}
}
