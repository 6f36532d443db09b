//! Audio storage port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Failed to write audio file: {0}")]
    WriteFailed(String),

    #[error("Failed to move audio file into place: {0}")]
    MoveFailed(String),
}

/// Port for durable audio persistence.
///
/// Each call stores one blob under a unique name and returns the stored
/// path. Persisted files are never rolled back by later failures in the
/// same operation; audio durability is preferred over all-or-nothing
/// semantics.
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Persist the blob durably and return its path
    async fn persist(&self, data: &[u8]) -> Result<PathBuf, StoreError>;
}
