//! Configuration file support for aptly-webindex.
//!
//! Provides TOML-based configuration through `webindex.toml` files in the
//! repository root, including data structures, file loading, and
//! validation. Command-line flags take precedence over config values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "webindex.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Page title override
    pub title: Option<String>,
    /// Output file path (relative paths resolve against the working directory)
    pub output: Option<String>,
    /// Replacement stylesheet for the embedded default
    pub css: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref title) = config.title {
        if title.trim().is_empty() {
            bail!(
                "Invalid config: title must not be empty.\n\n\
                 💡 Hint: Remove the 'title' key to keep the default, or set a non-empty value."
            );
        }
    }
    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            bail!(
                "Invalid config: output must not be empty.\n\n\
                 💡 Hint: Remove the 'output' key to write to stdout, or set a file path."
            );
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
