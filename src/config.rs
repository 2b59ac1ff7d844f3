//! Options file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::ui::TableOptions;

/// Load table options.
///
/// An explicit `path` must exist. Without one, the default config file is
/// used if present, otherwise the built-in defaults.
///
/// # Errors
///
/// Fails if the chosen file cannot be read or is not valid options TOML.
pub fn load(path: Option<&Path>) -> Result<TableOptions> {
    if let Some(path) = path {
        return load_file(path);
    }

    let default_path = config_path();
    if default_path.exists() {
        load_file(&default_path)
    } else {
        debug!(path = %default_path.display(), "no config file, using defaults");
        Ok(TableOptions::default())
    }
}

fn load_file(path: &Path) -> Result<TableOptions> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let options = from_toml(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded table options");
    Ok(options)
}

/// Parse options from TOML. Missing keys keep their defaults.
///
/// # Errors
///
/// Returns the TOML error for malformed input or mistyped values.
pub fn from_toml(contents: &str) -> Result<TableOptions> {
    let options: TableOptions = toml::from_str(contents)?;
    Ok(options)
}

/// Render options as TOML.
///
/// # Errors
///
/// Fails if the options cannot be represented as TOML.
pub fn to_toml(options: &TableOptions) -> Result<String> {
    toml::to_string_pretty(options).context("Failed to serialize options")
}

/// Get the logtable config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from("./logtable"),
        |d| d.config_dir().join("logtable"),
    )
}

/// Get the config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
