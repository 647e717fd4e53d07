use crate::console::Input;
use crate::ports::outbound::Output;
use crate::shared::Result;

/// Command port: a named unit of work runnable by an application or batch.
pub trait Command {
    /// The name the command is registered and invoked under (e.g. `cache:clear`)
    fn name(&self) -> &str;

    /// One-line description shown in command listings
    fn description(&self) -> &str {
        ""
    }

    /// Executes the command
    ///
    /// # Arguments
    /// * `input` - Arguments for this invocation
    /// * `output` - Destination for everything the command prints
    ///
    /// # Returns
    /// The command's integer return code (0 for success)
    ///
    /// # Errors
    /// Any error aborts the surrounding batch
    fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<i32>;
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<i32> {
        (**self).execute(input, output)
    }
}
