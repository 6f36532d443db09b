//! Filesystem audio store adapter

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{AudioStore, StoreError};

/// Sequence for temp file names, so concurrent writes in the same
/// millisecond never share a scratch file.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Flat-directory audio store.
///
/// Blobs land as `recording_<epoch-millis>.webm`; file existence and name
/// are the only durable record, with no index or metadata sidecar. The
/// blob is written to a scratch file first and renamed into place, a move
/// rather than a copy, so a partially written file is never visible under
/// its final name. Two uploads in the same millisecond share a final name;
/// that collision window is accepted, matching the upstream naming scheme.
pub struct FsAudioStore {
    dir: PathBuf,
}

impl FsAudioStore {
    /// Create the store, ensuring the storage directory exists
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// Get the storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn epoch_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()
    }
}

#[async_trait]
impl AudioStore for FsAudioStore {
    async fn persist(&self, data: &[u8]) -> Result<PathBuf, StoreError> {
        let millis = Self::epoch_millis();
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);

        let temp_path = self.dir.join(format!(".incoming_{}_{}.tmp", millis, seq));
        let final_path = self.dir.join(format!("recording_{}.webm", millis));

        fs::write(&temp_path, data)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::MoveFailed(e.to_string()));
        }

        Ok(final_path)
    }
}
