//! Result reconciler: client-side session state for transcripts and tasks

use thiserror::Error;

use crate::domain::tasks::{RelayOutput, Task};

use super::ports::ProcessingBackend;

/// Errors from the reconciler
#[derive(Debug, Clone, Error)]
pub enum ReconcileError {
    #[error("No task with id \"{0}\"")]
    UnknownTask(String),
}

/// Upload lifecycle as visible to a user.
/// "Still processing" and "failed" are always distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Processing,
    Ready,
    Failed(String),
}

/// The UI-visible session state.
/// Replaced as a whole on upload completion, so a transcript is never
/// visible without its tasks.
#[derive(Debug, Clone, Default)]
pub struct SessionView {
    pub status: ViewStatus,
    pub text: String,
    pub tasks: Vec<Task>,
    pub txt_file: String,
}

/// Merges asynchronous upload results into the session view and
/// synchronizes completion toggles back to the processing service.
///
/// The reconciler exclusively owns the in-memory task view for the
/// session; nothing else mutates it.
pub struct SessionReconciler<P: ProcessingBackend> {
    backend: P,
    view: SessionView,
}

impl<P: ProcessingBackend> SessionReconciler<P> {
    /// Create a reconciler over the given processing backend
    pub fn new(backend: P) -> Self {
        Self {
            backend,
            view: SessionView::default(),
        }
    }

    /// Get the current session view
    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// Mark the session as waiting on an in-flight upload
    pub fn on_upload_started(&mut self) {
        self.view.status = ViewStatus::Processing;
    }

    /// Replace the displayed transcript and task list with the new result.
    /// The swap is atomic from the view's perspective.
    pub fn on_upload_complete(&mut self, result: RelayOutput) {
        self.view = SessionView {
            status: ViewStatus::Ready,
            text: result.text,
            tasks: result.tasks,
            txt_file: result.txt_file,
        };
    }

    /// Mark the session as failed without discarding any prior result
    pub fn on_upload_failed(&mut self, reason: &str) {
        self.view.status = ViewStatus::Failed(reason.to_string());
    }

    /// Optimistically mark the task with the given id as completed and
    /// notify the processing service.
    ///
    /// Tasks are matched by id only; descriptions may collide. The
    /// notification is best-effort and at-most-once: a sync failure is
    /// logged and local state is not reverted.
    pub async fn toggle_task(&mut self, task_id: &str) -> Result<(), ReconcileError> {
        let task = self
            .view
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ReconcileError::UnknownTask(task_id.to_string()))?;

        task.completed = true;
        let description = task.task.clone();

        if let Err(e) = self.backend.complete(&description).await {
            tracing::warn!(
                error = %e,
                task = %description,
                "completion sync failed, keeping local state"
            );
        }
        Ok(())
    }

    /// Resolve the retrieval URL for the current transcript file.
    /// Re-resolved on every call; nothing is cached locally.
    pub fn download_url(&self) -> Option<String> {
        if self.view.txt_file.is_empty() {
            None
        } else {
            Some(self.backend.download_url(&self.view.txt_file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ProcessingError;
    use crate::domain::tasks::TranscriptResult;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    // Mock implementation for testing
    #[derive(Default)]
    struct MockBackend {
        completed: Mutex<Vec<String>>,
        fail_complete: bool,
    }

    #[async_trait]
    impl ProcessingBackend for MockBackend {
        async fn process(&self, _audio_file: &Path) -> Result<TranscriptResult, ProcessingError> {
            unimplemented!("not used by reconciler tests")
        }

        async fn complete(&self, task_description: &str) -> Result<(), ProcessingError> {
            if self.fail_complete {
                return Err(ProcessingError::RequestFailed("connection refused".into()));
            }
            self.completed
                .lock()
                .unwrap()
                .push(task_description.to_string());
            Ok(())
        }

        fn download_url(&self, txt_file: &str) -> String {
            format!("http://127.0.0.1:8000/download/{}", txt_file)
        }
    }

    fn sample_result() -> RelayOutput {
        RelayOutput {
            text: "buy milk and buy milk again".to_string(),
            tasks: vec![
                Task {
                    id: "T1".to_string(),
                    task: "buy milk".to_string(),
                    deadline: None,
                    completed: false,
                },
                Task {
                    id: "T2".to_string(),
                    task: "buy milk".to_string(),
                    deadline: Some("2025-01-01 09:00".to_string()),
                    completed: false,
                },
            ],
            audio_file: PathBuf::from("saved_audio/recording_1.webm"),
            txt_file: "t1.txt".to_string(),
        }
    }

    #[tokio::test]
    async fn upload_complete_replaces_view_atomically() {
        let mut reconciler = SessionReconciler::new(MockBackend::default());
        reconciler.on_upload_started();
        assert_eq!(reconciler.view().status, ViewStatus::Processing);

        reconciler.on_upload_complete(sample_result());

        let view = reconciler.view();
        assert_eq!(view.status, ViewStatus::Ready);
        assert_eq!(view.text, "buy milk and buy milk again");
        assert_eq!(view.tasks.len(), 2);
        assert_eq!(view.txt_file, "t1.txt");
    }

    #[tokio::test]
    async fn upload_failure_is_distinguishable_from_processing() {
        let mut reconciler = SessionReconciler::new(MockBackend::default());
        reconciler.on_upload_started();
        reconciler.on_upload_failed("Processing failed");

        assert_eq!(
            reconciler.view().status,
            ViewStatus::Failed("Processing failed".to_string())
        );
    }

    #[tokio::test]
    async fn toggle_matches_by_id_not_description() {
        let mut reconciler = SessionReconciler::new(MockBackend::default());
        reconciler.on_upload_complete(sample_result());

        // Both tasks share the description "buy milk"; only T1 may change.
        reconciler.toggle_task("T1").await.unwrap();

        let view = reconciler.view();
        assert!(view.tasks[0].completed);
        assert!(!view.tasks[1].completed);

        let completed = reconciler.backend.completed.lock().unwrap();
        assert_eq!(completed.as_slice(), ["buy milk".to_string()]);
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_an_error() {
        let mut reconciler = SessionReconciler::new(MockBackend::default());
        reconciler.on_upload_complete(sample_result());

        let err = reconciler.toggle_task("missing").await.unwrap_err();
        assert!(matches!(err, ReconcileError::UnknownTask(_)));
        assert!(reconciler.view().tasks.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn sync_failure_does_not_revert_optimistic_state() {
        let backend = MockBackend {
            fail_complete: true,
            ..Default::default()
        };
        let mut reconciler = SessionReconciler::new(backend);
        reconciler.on_upload_complete(sample_result());

        reconciler.toggle_task("T2").await.unwrap();
        assert!(reconciler.view().tasks[1].completed);
    }

    #[tokio::test]
    async fn download_url_resolves_against_backend() {
        let mut reconciler = SessionReconciler::new(MockBackend::default());
        assert!(reconciler.download_url().is_none());

        reconciler.on_upload_complete(sample_result());
        assert_eq!(
            reconciler.download_url().unwrap(),
            "http://127.0.0.1:8000/download/t1.txt"
        );
    }
}
