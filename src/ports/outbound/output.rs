use crate::console::Verbosity;
use crate::shared::Result;

/// Output port: destination receiving console output.
///
/// Implementors only provide [`Output::do_write`] and verbosity storage;
/// the verbosity filtering lives in the provided methods.
pub trait Output {
    /// Writes a message to the underlying destination, unconditionally
    ///
    /// # Arguments
    /// * `message` - The text to write
    /// * `newline` - Whether a newline follows the message
    fn do_write(&mut self, message: &str, newline: bool) -> Result<()>;

    fn verbosity(&self) -> Verbosity;

    fn set_verbosity(&mut self, verbosity: Verbosity);

    /// Writes a message unless the output is quiet.
    fn write(&mut self, message: &str, newline: bool) -> Result<()> {
        self.write_at(message, newline, Verbosity::Normal)
    }

    /// Writes a message followed by a newline unless the output is quiet.
    fn writeln(&mut self, message: &str) -> Result<()> {
        self.write(message, true)
    }

    /// Writes a message only when the output verbosity reaches `level`.
    ///
    /// Nothing is written to a quiet output, whatever the level.
    fn write_at(&mut self, message: &str, newline: bool, level: Verbosity) -> Result<()> {
        if self.is_quiet() || level > self.verbosity() {
            return Ok(());
        }
        self.do_write(message, newline)
    }

    fn is_quiet(&self) -> bool {
        self.verbosity() == Verbosity::Quiet
    }

    fn is_verbose(&self) -> bool {
        self.verbosity() >= Verbosity::Verbose
    }

    fn is_very_verbose(&self) -> bool {
        self.verbosity() >= Verbosity::VeryVerbose
    }

    fn is_debug(&self) -> bool {
        self.verbosity() >= Verbosity::Debug
    }
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn do_write(&mut self, message: &str, newline: bool) -> Result<()> {
        (**self).do_write(message, newline)
    }

    fn verbosity(&self) -> Verbosity {
        (**self).verbosity()
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        (**self).set_verbosity(verbosity)
    }
}
