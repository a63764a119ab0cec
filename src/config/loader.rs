use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const APP_DIR: &str = "cupcake";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cupcake/config.toml` on Unix, or the equivalent via
    /// `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_DIR).join("config.toml")
    }

    /// Directory for the log file and the share outbox.
    pub fn data_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join(APP_DIR)
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one quantity option, all positive
    /// - Currency symbol is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = &self.menu.quantity_options;
        if options.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one quantity option must be configured".to_string(),
            });
        }

        if options.contains(&0) {
            return Err(ConfigError::ValidationError {
                message: "Quantity options must be positive".to_string(),
            });
        }

        if self.pricing.currency_symbol.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Currency symbol must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Outbox used by the `file` share target.
    pub fn outbox_path(&self) -> PathBuf {
        self.share
            .outbox
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("outbox.jsonl"))
    }

    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("cupcake.log"))
    }
}
