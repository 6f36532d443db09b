//! Relay upload port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recording::RecordedAudio;
use crate::domain::tasks::RelayOutput;

/// Upload errors
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    #[error("Upload request failed: {0}")]
    RequestFailed(String),

    #[error("Relay rejected the upload: {0}")]
    Rejected(String),

    #[error("Failed to parse relay response: {0}")]
    ParseError(String),
}

/// Port for uploading a finalized recording to the relay service
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Upload the blob and return the normalized relay result
    async fn upload(&self, audio: &RecordedAudio) -> Result<RelayOutput, UploadError>;
}
