//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default address the relay listens on
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3001";

/// Default directory for persisted recordings
pub const DEFAULT_STORAGE_DIR: &str = "saved_audio";

/// Default base URL of the processing service
pub const DEFAULT_PROCESSING_URL: &str = "http://127.0.0.1:8000";

/// Default bound on how long one processing call may take, in seconds
pub const DEFAULT_PROCESSING_TIMEOUT_SECS: u64 = 120;

/// Default allowed CORS origin for the upload endpoint
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub listen_addr: Option<String>,
    pub storage_dir: Option<String>,
    pub processing_url: Option<String>,
    pub processing_timeout_secs: Option<u64>,
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            listen_addr: Some(DEFAULT_LISTEN_ADDR.to_string()),
            storage_dir: Some(DEFAULT_STORAGE_DIR.to_string()),
            processing_url: Some(DEFAULT_PROCESSING_URL.to_string()),
            processing_timeout_secs: Some(DEFAULT_PROCESSING_TIMEOUT_SECS),
            allowed_origin: Some(DEFAULT_ALLOWED_ORIGIN.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            listen_addr: other.listen_addr.or(self.listen_addr),
            storage_dir: other.storage_dir.or(self.storage_dir),
            processing_url: other.processing_url.or(self.processing_url),
            processing_timeout_secs: other.processing_timeout_secs.or(self.processing_timeout_secs),
            allowed_origin: other.allowed_origin.or(self.allowed_origin),
        }
    }

    /// Get the listen address, or the default if not set
    pub fn listen_addr_or_default(&self) -> &str {
        self.listen_addr.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR)
    }

    /// Get the storage directory, or the default if not set
    pub fn storage_dir_or_default(&self) -> &str {
        self.storage_dir.as_deref().unwrap_or(DEFAULT_STORAGE_DIR)
    }

    /// Get the processing service base URL, or the default if not set
    pub fn processing_url_or_default(&self) -> &str {
        self.processing_url
            .as_deref()
            .unwrap_or(DEFAULT_PROCESSING_URL)
    }

    /// Get the processing timeout in seconds, or the default if not set
    pub fn processing_timeout_or_default(&self) -> u64 {
        self.processing_timeout_secs
            .unwrap_or(DEFAULT_PROCESSING_TIMEOUT_SECS)
    }

    /// Get the allowed CORS origin, or the default if not set
    pub fn allowed_origin_or_default(&self) -> &str {
        self.allowed_origin
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN)
    }
}
