//! HTTP relay client adapter

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::application::ports::{RelayClient, UploadError};
use crate::domain::recording::RecordedAudio;
use crate::domain::tasks::RelayOutput;
use crate::infrastructure::server::ErrorBody;

/// Uploads finalized recordings to the relay's `/upload` endpoint as a
/// multipart form with a single `file` field.
pub struct HttpRelayClient {
    upload_url: String,
    client: reqwest::Client,
}

impl HttpRelayClient {
    /// Create a client for the relay at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            upload_url: format!("{}/upload", base_url.into().trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn upload(&self, audio: &RecordedAudio) -> Result<RelayOutput, UploadError> {
        let part = Part::bytes(audio.data().to_vec())
            .file_name("recording.webm")
            .mime_str(audio.content_type())
            .map_err(|e| UploadError::RequestFailed(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("HTTP {}", status),
            };
            return Err(UploadError::Rejected(message));
        }

        response
            .json::<RelayOutput>()
            .await
            .map_err(|e| UploadError::ParseError(e.to_string()))
    }
}
