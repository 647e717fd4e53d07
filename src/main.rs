mod cli;

use cli::Args;
use console_kit::adapters::inbound::commands::{EchoCommand, ExitCommand};
use console_kit::adapters::outbound::console::StderrProgressReporter;
use console_kit::application::dto::{BatchRequest, OutputTarget};
use console_kit::application::use_cases::RunBatchUseCase;
use console_kit::config::{self, ConfigFile, CONFIG_FILENAME};
use console_kit::console::Application;
use console_kit::shared::error::ExitCode;
use console_kit::shared::Result;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            report_error(&e);
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = if verbose >= 3 {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(tracing_subscriber::filter::LevelFilter::WARN)
        .with_target("console_kit", level);

    let stderr_log_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(stderr_log_layer)
        .try_init()
        .is_err()
    {
        eprintln!("⚠️  Warning: Failed to initialize logging.");
    }
}

fn report_error(error: &anyhow::Error) {
    let colored = std::io::stderr().is_terminal();
    let headline = "❌ An error occurred:";
    if colored {
        eprintln!("\n{}\n", headline.red().bold());
    } else {
        eprintln!("\n{}\n", headline);
    }
    eprintln!("{}", error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}

fn build_application() -> Application {
    let mut application = Application::new("console-kit");
    application.register(EchoCommand).register(ExitCommand);
    application
}

fn run(args: Args) -> Result<i32> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    // Register built-in commands (explicit name → handler map)
    let application = build_application();

    if args.list {
        list_commands(&application);
        return Ok(ExitCode::Success.as_i32());
    }

    let entries = collect_entries(&args, &config)?;
    if entries.is_empty() {
        anyhow::bail!(
            "No commands to run\n\n💡 Hint: Pass command lines as arguments, use --batch-file, or list them under 'commands' in {}",
            CONFIG_FILENAME
        );
    }

    let target = resolve_target(&args, &config)?;
    let mode_name = args
        .mode
        .clone()
        .or_else(|| config.write_mode.clone())
        .unwrap_or_else(|| "append".to_string());
    let verbosity = match args.verbosity() {
        Some(verbosity) => verbosity,
        None => config.verbosity()?.unwrap_or_default(),
    };

    let request = BatchRequest::new(entries, target)
        .with_mode_name(mode_name)
        .with_verbosity(verbosity);

    let response = if args.progress {
        RunBatchUseCase::new(&application, StderrProgressReporter::new()).execute(request)?
    } else {
        RunBatchUseCase::new(&application, ()).execute(request)?
    };

    Ok(response.return_code & 0xff)
}

/// Config entries first, then the batch file, then command-line arguments.
fn collect_entries(args: &Args, config: &ConfigFile) -> Result<Vec<Value>> {
    let mut entries = config.commands.clone().unwrap_or_default();
    if let Some(batch_file) = args.batch_file.as_deref() {
        entries.extend(config::load_batch_file(batch_file)?);
    }
    entries.extend(args.commands.iter().cloned().map(Value::String));
    Ok(entries)
}

fn resolve_target(args: &Args, config: &ConfigFile) -> Result<OutputTarget> {
    let output = args
        .output
        .clone()
        .or_else(|| config.output.as_ref().map(PathBuf::from));
    let root = args
        .filesystem_root
        .clone()
        .or_else(|| config.filesystem_root.as_ref().map(PathBuf::from));

    Ok(match (output, root) {
        (None, _) => OutputTarget::Stdout,
        (Some(path), None) => OutputTarget::File(path),
        (Some(path), Some(root)) => {
            validate_filesystem_root(&root)?;
            OutputTarget::Filesystem { root, path }
        }
    })
}

fn list_commands(application: &Application) {
    let colored = std::io::stdout().is_terminal();
    println!("Available commands:");
    for command in application.commands() {
        let name = format!("{:<12}", command.name());
        if colored {
            println!("  {} {}", name.green(), command.description());
        } else {
            println!("  {} {}", name, command.description());
        }
    }
}

fn validate_filesystem_root(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(
            "Invalid filesystem root: {}\nReason: Directory does not exist\n\n💡 Hint: Please specify an existing directory",
            path.display()
        );
    }

    // Security check: Reject symbolic links for the root itself
    let metadata = std::fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Invalid filesystem root: {}\nReason: Failed to read path metadata: {}",
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Invalid filesystem root: {}\nReason: Security: the root is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !path.is_dir() {
        anyhow::bail!(
            "Invalid filesystem root: {}\nReason: Not a directory",
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("console-kit").chain(list.iter().copied())).unwrap()
    }

    #[test]
    fn test_validate_filesystem_root_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_filesystem_root(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_filesystem_root_nonexistent() {
        let result = validate_filesystem_root(Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_filesystem_root_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = validate_filesystem_root(&file_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Not a directory"));
    }

    #[test]
    fn test_resolve_target_defaults_to_stdout() {
        let target = resolve_target(&args(&["echo"]), &ConfigFile::default()).unwrap();
        assert_eq!(target, OutputTarget::Stdout);
    }

    #[test]
    fn test_resolve_target_cli_overrides_config() {
        let config = ConfigFile {
            output: Some("from-config.log".to_string()),
            ..Default::default()
        };

        let target = resolve_target(&args(&["-o", "from-cli.log", "echo"]), &config).unwrap();
        assert_eq!(target, OutputTarget::File(PathBuf::from("from-cli.log")));

        let target = resolve_target(&args(&["echo"]), &config).unwrap();
        assert_eq!(target, OutputTarget::File(PathBuf::from("from-config.log")));
    }

    #[test]
    fn test_resolve_target_filesystem() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap();

        let target = resolve_target(
            &args(&["-o", "out.log", "--filesystem-root", root, "echo"]),
            &ConfigFile::default(),
        )
        .unwrap();
        assert_eq!(
            target,
            OutputTarget::Filesystem {
                root: temp_dir.path().to_path_buf(),
                path: PathBuf::from("out.log"),
            }
        );
    }

    #[test]
    fn test_collect_entries_order() {
        let temp_dir = TempDir::new().unwrap();
        let batch_file = temp_dir.path().join("batch.json");
        fs::write(&batch_file, r#"["echo from-file"]"#).unwrap();
        let config = ConfigFile {
            commands: Some(vec![Value::from("echo from-config")]),
            ..Default::default()
        };

        let entries = collect_entries(
            &args(&["-b", batch_file.to_str().unwrap(), "echo from-cli"]),
            &config,
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                Value::from("echo from-config"),
                Value::from("echo from-file"),
                Value::from("echo from-cli"),
            ]
        );
    }
}
