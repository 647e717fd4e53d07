use super::parse_input;
use crate::console::Input;
use crate::ports::inbound::Command;
use crate::ports::outbound::Output;
use crate::shared::Result;
use clap::Parser;

/// Echo text to the output.
#[derive(Parser, Debug)]
#[command(name = "echo", disable_version_flag = true)]
struct EchoArgs {
    /// Suppress the trailing newline from the output.
    #[arg(short = 'n')]
    no_trailing_newline: bool,

    /// Tokens to echo, joined by single spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Built-in `echo` command
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Print the given text"
    }

    fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<i32> {
        let Some(args) = parse_input::<EchoArgs>(self.name(), input, output)? else {
            return Ok(0);
        };

        output.write(&args.args.join(" "), !args.no_trailing_newline)?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::output::BufferedOutput;

    fn run(line: &str) -> (i32, String) {
        let mut output = BufferedOutput::new();
        let code = EchoCommand
            .execute(&Input::parse(line).unwrap(), &mut output)
            .unwrap();
        (code, output.fetch())
    }

    #[test]
    fn test_echo_joins_arguments() {
        assert_eq!(run("echo hello 'big world'"), (0, "hello big world\n".to_string()));
    }

    #[test]
    fn test_echo_without_newline() {
        assert_eq!(run("echo -n partial"), (0, "partial".to_string()));
    }

    #[test]
    fn test_echo_passes_hyphen_values_through() {
        assert_eq!(run("echo value --not-a-flag"), (0, "value --not-a-flag\n".to_string()));
    }

    #[test]
    fn test_echo_help_is_printed() {
        let (code, text) = run("echo --help");
        assert_eq!(code, 0);
        assert!(text.contains("Suppress the trailing newline"));
    }
}
