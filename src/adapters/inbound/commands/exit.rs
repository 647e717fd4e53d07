use super::parse_input;
use crate::console::Input;
use crate::ports::inbound::Command;
use crate::ports::outbound::Output;
use crate::shared::Result;
use clap::Parser;

/// Return a fixed code, optionally printing a message first.
#[derive(Parser, Debug)]
#[command(name = "exit", disable_version_flag = true)]
struct ExitArgs {
    /// Return code to report.
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    code: i32,

    /// Message to print before returning.
    #[arg(short, long)]
    message: Option<String>,
}

/// Built-in `exit` command
#[derive(Debug, Default, Clone, Copy)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> &str {
        "Return the given code"
    }

    fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<i32> {
        let Some(args) = parse_input::<ExitArgs>(self.name(), input, output)? else {
            return Ok(0);
        };

        if let Some(message) = args.message {
            output.writeln(&message)?;
        }
        Ok(args.code)
    }
}
