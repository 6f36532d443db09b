//! HTTP processing service client adapter

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use serde::Serialize;
use tokio::fs::File;

use crate::application::ports::{ProcessingBackend, ProcessingError};
use crate::domain::recording::AUDIO_CONTENT_TYPE;
use crate::domain::tasks::TranscriptResult;

/// Completion notification body for `POST /complete`
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    task: &'a str,
}

/// Processing service client over HTTP.
///
/// Speaks the service's three endpoints: `POST /process` (multipart audio
/// in, transcript result out), `POST /complete` (JSON task completion
/// notification), and `GET /download/{file}` (raw transcript bytes,
/// URL-building only). Every call is bounded by the configured timeout so
/// the relay never hangs on a service that stops responding.
pub struct HttpProcessingClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProcessingClient {
    /// Create a client for the service at the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout,
        }
    }

    fn process_url(&self) -> String {
        format!("{}/process", self.base_url)
    }

    fn complete_url(&self) -> String {
        format!("{}/complete", self.base_url)
    }

    fn send_error(e: reqwest::Error) -> ProcessingError {
        if e.is_timeout() {
            ProcessingError::Timeout
        } else {
            ProcessingError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl ProcessingBackend for HttpProcessingClient {
    async fn process(&self, audio_file: &Path) -> Result<TranscriptResult, ProcessingError> {
        let file = File::open(audio_file)
            .await
            .map_err(|e| ProcessingError::ReadFailed(e.to_string()))?;

        let file_name = audio_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "recording.webm".to_string());

        // Stream the persisted file; no artificial size cap.
        let part = Part::stream(Body::from(file))
            .file_name(file_name)
            .mime_str(AUDIO_CONTENT_TYPE)
            .map_err(|e| ProcessingError::RequestFailed(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.process_url())
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::send_error)?;

        let status = response.status();
        if !status.is_success() {
            // The raw downstream payload is never surfaced to callers.
            return Err(ProcessingError::Status(status.as_u16()));
        }

        response
            .json::<TranscriptResult>()
            .await
            .map_err(|e| ProcessingError::ParseError(e.to_string()))
    }

    async fn complete(&self, task_description: &str) -> Result<(), ProcessingError> {
        let response = self
            .client
            .post(self.complete_url())
            .json(&CompletionRequest {
                task: task_description,
            })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessingError::Status(status.as_u16()));
        }
        // Acknowledgment only; the body is not consumed.
        Ok(())
    }

    fn download_url(&self, txt_file: &str) -> String {
        format!("{}/download/{}", self.base_url, txt_file)
    }
}
