use clap::{ArgAction, Parser};
use console_kit::console::Verbosity;
use std::path::PathBuf;

/// Run a batch of console commands, optionally sending their output to a file
#[derive(Parser, Debug)]
#[command(name = "console-kit")]
#[command(version)]
#[command(
    about = "Run a batch of console commands, optionally sending their output to a file",
    long_about = None
)]
pub struct Args {
    /// Command lines to run, in order (e.g. "echo hello" "exit 0")
    #[arg(value_name = "COMMAND_LINE")]
    pub commands: Vec<String>,

    /// JSON file holding an array of command lines or {"command", "input"} objects
    #[arg(short, long, value_name = "PATH")]
    pub batch_file: Option<PathBuf>,

    /// Config file (defaults to console-kit.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write mode for the output file: append or reset
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Persist the output file through a filesystem rooted at this directory
    #[arg(long, value_name = "DIR", requires = "output")]
    pub filesystem_root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress all command output
    #[arg(short, long)]
    pub quiet: bool,

    /// Show a progress bar on stderr while the batch runs
    #[arg(long)]
    pub progress: bool,

    /// List the available commands and exit
    #[arg(long)]
    pub list: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Verbosity requested on the command line, if any.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else if self.verbose > 0 {
            Some(Verbosity::from_occurrences(self.verbose))
        } else {
            None
        }
    }
}
