//! Configuration file support for console-kit.
//!
//! Provides YAML-based configuration through `console-kit.config.yml` files
//! and JSON batch files, including data structures, file loading, and
//! validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::console::Verbosity;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "console-kit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Batch entries: command lines or `{command, input}` objects
    pub commands: Option<Vec<Value>>,
    pub output: Option<String>,
    pub write_mode: Option<String>,
    pub filesystem_root: Option<String>,
    pub verbosity: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed verbosity, if one is configured.
    pub fn verbosity(&self) -> Result<Option<Verbosity>> {
        self.verbosity
            .as_deref()
            .map(|value| value.parse::<Verbosity>())
            .transpose()
            .map_err(Into::into)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Load batch entries from a JSON file holding an array.
pub fn load_batch_file(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read batch file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let entries: Vec<Value> = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse batch file: {}\n\n💡 Hint: The file must contain a JSON array of command lines or {{\"command\", \"input\"}} objects.",
            path.display()
        )
    })?;

    Ok(entries)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.verbosity().with_context(|| {
        "Invalid config: verbosity.\n\n💡 Hint: Use one of quiet, normal, verbose, very-verbose, debug."
    })?;

    if let Some(ref commands) = config.commands {
        for (i, entry) in commands.iter().enumerate() {
            if entry.as_str().is_some_and(|line| line.trim().is_empty()) {
                bail!(
                    "Invalid config: commands[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a command line such as \"echo hello\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
