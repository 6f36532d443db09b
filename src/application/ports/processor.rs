//! Processing service port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::tasks::TranscriptResult;

/// Processing service errors
#[derive(Debug, Clone, Error)]
pub enum ProcessingError {
    #[error("Failed to read persisted audio: {0}")]
    ReadFailed(String),

    #[error("Processing request failed: {0}")]
    RequestFailed(String),

    #[error("Processing request timed out")]
    Timeout,

    #[error("Processing service returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse processing response: {0}")]
    ParseError(String),
}

/// Port for the external processing service that turns audio into a
/// transcript and extracted tasks.
#[async_trait]
pub trait ProcessingBackend: Send + Sync {
    /// Submit a persisted audio file for transcription and task extraction
    async fn process(&self, audio_file: &Path) -> Result<TranscriptResult, ProcessingError>;

    /// Notify the service that a task was completed.
    ///
    /// The service matches by description; the response body is not
    /// otherwise consumed.
    async fn complete(&self, task_description: &str) -> Result<(), ProcessingError>;

    /// Build the retrieval URL for a transcript file
    fn download_url(&self, txt_file: &str) -> String;
}
