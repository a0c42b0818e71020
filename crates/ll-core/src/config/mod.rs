//! Client configuration DTOs.
//!
//! Pure data: mapping from TOML into typed structs. Missing sections and keys
//! fall back to [`Default`]; nothing here checks paths or levels.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_FILE_NAME: &str = "async-storage.json";

/// Top-level client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Where the persisted key-value document lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File name of the key-value document inside the data directory.
    pub file_name: String,
    /// Overrides the platform data directory when set.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_STORE_FILE_NAME.to_string(),
            data_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is not set.
    /// `None` picks `debug` for debug builds and `info` otherwise.
    pub level: Option<String>,
    /// Also write a daily log file under the logs directory.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: true,
        }
    }
}

impl ClientConfig {
    /// Map a parsed TOML document onto the configuration.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let config = toml_value.clone().try_into()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn empty_document_yields_defaults() {
        let toml_value: Value = toml::from_str("").unwrap();

        let config = ClientConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.storage.file_name, DEFAULT_STORE_FILE_NAME);
        assert!(config.logging.file);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let toml_str = r#"
            [storage]
            data_dir = "/data/little-lemon"

            [logging]
            level = "warn"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = ClientConfig::from_toml(&toml_value).unwrap();

        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/data/little-lemon"))
        );
        assert_eq!(config.storage.file_name, DEFAULT_STORE_FILE_NAME);
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert!(config.logging.file);
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        let toml_value: Value = toml::from_str("[logging]\nfile = \"yes\"").unwrap();

        assert!(ClientConfig::from_toml(&toml_value).is_err());
    }
}
