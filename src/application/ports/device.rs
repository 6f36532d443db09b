//! Audio input port interfaces

use async_trait::async_trait;
use thiserror::Error;

/// Device errors
#[derive(Debug, Clone, Error)]
pub enum DeviceError {
    #[error("No input device available: {0}")]
    Unavailable(String),

    #[error("Device stream failed: {0}")]
    Stream(String),
}

/// Port for acquiring an exclusive audio input session
#[async_trait]
pub trait AudioInput: Send + Sync {
    /// Acquire the device and begin delivering encoded chunks.
    ///
    /// # Returns
    /// An open input session, or `DeviceError::Unavailable` if permission
    /// is denied or no input device exists.
    async fn open(&self) -> Result<Box<dyn InputSession>, DeviceError>;
}

/// One exclusive device session delivering encoded audio chunks.
///
/// Chunks arrive in capture order. After `stop`, remaining buffered chunks
/// are still delivered by `next_chunk`, which then returns `None`.
#[async_trait]
pub trait InputSession: Send {
    /// Next encoded chunk, or `None` once the session is stopped and drained
    async fn next_chunk(&mut self) -> Option<Vec<u8>>;

    /// Stop the device; buffered chunks remain retrievable
    async fn stop(&mut self) -> Result<(), DeviceError>;
}
