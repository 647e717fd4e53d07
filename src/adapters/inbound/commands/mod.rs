/// Built-in commands shipped with the binary
mod echo;
mod exit;

pub use echo::EchoCommand;
pub use exit::ExitCommand;

use crate::console::Input;
use crate::ports::outbound::Output;
use crate::shared::Result;
use clap::error::ErrorKind;
use clap::Parser;

/// Parses a command's input with clap.
///
/// Returns `None` when clap handled the invocation itself (`--help`), after
/// printing its text to `output`.
pub(crate) fn parse_input<P: Parser>(
    name: &str,
    input: &Input,
    output: &mut dyn Output,
) -> Result<Option<P>> {
    match P::try_parse_from(input.argv(name)) {
        Ok(args) => Ok(Some(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            output.write(&e.render().to_string(), false)?;
            Ok(None)
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("Invalid arguments for '{}'", name))),
    }
}
