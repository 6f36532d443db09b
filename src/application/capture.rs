//! Capture controller use case

use thiserror::Error;

use crate::domain::recording::{CaptureSession, CaptureState, ChunkBuffer, RecordedAudio};

use super::ports::{AudioInput, DeviceError, InputSession};

/// Errors from the capture controller
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Audio device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("No recording in progress")]
    NotRecording,

    #[error("Recording produced no audio data")]
    EmptyRecording,

    #[error("Device stream failed: {0}")]
    Stream(String),
}

impl From<DeviceError> for CaptureError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::Unavailable(msg) => Self::DeviceUnavailable(msg),
            DeviceError::Stream(msg) => Self::Stream(msg),
        }
    }
}

/// Owns the recording device session and produces one finalized blob per
/// recording.
///
/// `start` while already recording is an ignored no-op; overlapping device
/// sessions are not allowed. `stop` while idle reports `NotRecording`.
pub struct CaptureController<I: AudioInput> {
    input: I,
    session: CaptureSession,
    device: Option<Box<dyn InputSession>>,
}

impl<I: AudioInput> CaptureController<I> {
    /// Create a controller over the given audio input
    pub fn new(input: I) -> Self {
        Self {
            input,
            session: CaptureSession::new(),
            device: None,
        }
    }

    /// Get the current capture state
    pub fn state(&self) -> CaptureState {
        self.session.state()
    }

    /// Check if a recording is in progress
    pub fn is_recording(&self) -> bool {
        self.session.is_recording()
    }

    /// Acquire the device and begin buffering chunks.
    ///
    /// Fails with `DeviceUnavailable` when the device cannot be opened;
    /// the controller stays idle in that case.
    pub async fn start(&mut self) -> Result<(), CaptureError> {
        if !self.session.is_idle() {
            // Re-entrant start is ignored; stop() first to begin a new session
            return Ok(());
        }

        let device = self.input.open().await?;
        // Cannot fail: the idle check above guarantees the transition.
        let _ = self.session.start_recording();
        self.device = Some(device);
        Ok(())
    }

    /// End the session and finalize all buffered chunks, in arrival order,
    /// into a single blob.
    ///
    /// Fails with `NotRecording` when no session is active and with
    /// `EmptyRecording` when the session buffered no data; an empty blob
    /// must never reach the upload path.
    pub async fn stop(&mut self) -> Result<RecordedAudio, CaptureError> {
        self.session
            .stop_recording()
            .map_err(|_| CaptureError::NotRecording)?;

        let Some(mut device) = self.device.take() else {
            let _ = self.session.complete();
            return Err(CaptureError::NotRecording);
        };

        let stop_result = device.stop().await;

        let mut buffer = ChunkBuffer::new();
        while let Some(chunk) = device.next_chunk().await {
            buffer.push(chunk);
        }

        let _ = self.session.complete();
        stop_result?;

        let audio = buffer.finalize();
        if audio.is_empty() {
            return Err(CaptureError::EmptyRecording);
        }
        Ok(audio)
    }
}
