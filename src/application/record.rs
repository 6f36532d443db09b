//! Record-and-relay workflow: capture, upload, reconcile

use crate::domain::recording::CaptureState;
use crate::domain::tasks::RelayOutput;

use super::capture::{CaptureController, CaptureError};
use super::ports::{AudioInput, ProcessingBackend, RelayClient};
use super::reconcile::{ReconcileError, SessionReconciler, SessionView};

/// Client-side composition of one recording session: stop a recording,
/// upload the finalized blob to the relay, and merge the result into the
/// session view.
///
/// Each unit of work (one recording, one upload, one result) is
/// self-contained; a new recording may start while a prior upload is still
/// resolving in another session.
pub struct RecordAndRelay<I, U, P>
where
    I: AudioInput,
    U: RelayClient,
    P: ProcessingBackend,
{
    capture: CaptureController<I>,
    uploader: U,
    reconciler: SessionReconciler<P>,
}

impl<I, U, P> RecordAndRelay<I, U, P>
where
    I: AudioInput,
    U: RelayClient,
    P: ProcessingBackend,
{
    /// Create a workflow instance
    pub fn new(input: I, uploader: U, backend: P) -> Self {
        Self {
            capture: CaptureController::new(input),
            uploader,
            reconciler: SessionReconciler::new(backend),
        }
    }

    /// Begin a recording session
    pub async fn start_recording(&mut self) -> Result<(), CaptureError> {
        self.capture.start().await
    }

    /// Get the current capture state
    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    /// Get the current session view
    pub fn view(&self) -> &SessionView {
        self.reconciler.view()
    }

    /// Stop the recording and send the finalized blob through the relay.
    ///
    /// Empty recordings are rejected here, before any upload. Upload and
    /// processing failures are merged into the view as a failed status
    /// rather than propagated; the recording itself succeeded.
    pub async fn stop_and_upload(&mut self) -> Result<(), CaptureError> {
        let audio = self.capture.stop().await?;
        tracing::debug!(size = %audio.human_readable_size(), "recording finalized");

        self.reconciler.on_upload_started();
        match self.uploader.upload(&audio).await {
            Ok(result) => self.on_upload_complete(result),
            Err(e) => {
                tracing::warn!(error = %e, "upload failed");
                self.reconciler.on_upload_failed(&e.to_string());
            }
        }
        Ok(())
    }

    /// Merge a finished upload result into the view
    pub fn on_upload_complete(&mut self, result: RelayOutput) {
        self.reconciler.on_upload_complete(result);
    }

    /// Toggle a task completed and notify the processing service
    pub async fn toggle_task(&mut self, task_id: &str) -> Result<(), ReconcileError> {
        self.reconciler.toggle_task(task_id).await
    }

    /// Resolve the transcript download URL, if a result is present
    pub fn download_url(&self) -> Option<String> {
        self.reconciler.download_url()
    }
}
