//! Configuration loading.
//!
//! Reads TOML into [`ClientConfig`]. No validation happens here: whatever the
//! file says is handed on, and absent keys take their defaults.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use ll_core::ClientConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`ClientConfig`].
pub fn load_config(config_path: PathBuf) -> anyhow::Result<ClientConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ClientConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config in {}", config_path.display()))
}

/// Like [`load_config`], but a missing file yields the default configuration.
pub fn load_config_or_default(config_path: PathBuf) -> anyhow::Result<ClientConfig> {
    match std::fs::metadata(&config_path) {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(ClientConfig::default()),
        _ => load_config(config_path),
    }
}
