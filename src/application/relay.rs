//! Relay use case: persist an uploaded recording and forward it for
//! processing

use thiserror::Error;

use crate::domain::tasks::RelayOutput;

use super::ports::{AudioStore, ProcessingBackend, ProcessingError, StoreError};

/// Errors from the relay operation
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    #[error("No file received")]
    NoFileReceived,

    #[error("Failed to persist audio: {0}")]
    Storage(#[from] StoreError),

    #[error("Processing failed: {0}")]
    Processing(#[from] ProcessingError),
}

/// Stateless relay between upload callers and the processing service.
///
/// Each relay operation is independent; the only shared resource is the
/// storage namespace, kept collision-free by the store's naming scheme.
pub struct RelayService<S, P> {
    store: S,
    backend: P,
}

impl<S, P> RelayService<S, P>
where
    S: AudioStore,
    P: ProcessingBackend,
{
    /// Create a relay over the given store and processing backend
    pub fn new(store: S, backend: P) -> Self {
        Self { store, backend }
    }

    /// Persist the uploaded binary, forward it to the processing service,
    /// and normalize the result.
    ///
    /// An absent or empty payload fails with `NoFileReceived` and persists
    /// nothing. A downstream failure after persistence fails with
    /// `Processing`, and the persisted file is kept: the recording stays
    /// recoverable on the server even when transcription is lost.
    pub async fn relay(&self, payload: Option<Vec<u8>>) -> Result<RelayOutput, RelayError> {
        let data = match payload {
            Some(data) if !data.is_empty() => data,
            _ => return Err(RelayError::NoFileReceived),
        };

        let audio_file = self.store.persist(&data).await?;
        tracing::debug!(file = %audio_file.display(), bytes = data.len(), "recording persisted");

        let result = self.backend.process(&audio_file).await?;

        Ok(RelayOutput {
            text: result.text,
            tasks: result.tasks,
            audio_file,
            txt_file: result.txt_file,
        })
    }
}
