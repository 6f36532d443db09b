//! TOML config file store adapter

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Config store reading and writing a TOML file, by default under the
/// user's config directory.
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    /// Create a config store with the default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("echo-audit");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the config, or an empty config if the file does not exist
    pub async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save the config, creating parent directories as needed
    pub async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for TomlConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
