//! Channel-backed audio input adapter
//!
//! The recording device itself is an external collaborator; this adapter
//! is the seam between whatever delivers encoded chunks (a media recorder
//! hook, a test harness) and the capture controller. Chunks are buffered
//! on an unbounded channel in arrival order, so delivery never blocks the
//! producer and nothing is reordered.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::{AudioInput, DeviceError, InputSession};

type SenderSlot = Arc<Mutex<Option<mpsc::UnboundedSender<Vec<u8>>>>>;

/// Producer handle that feeds encoded chunks into a [`ChannelAudioInput`].
///
/// The feeder always delivers to the currently open session; chunks pushed
/// while no session is open (or after the session is stopped) are dropped.
#[derive(Debug, Clone)]
pub struct ChunkFeeder {
    tx: SenderSlot,
}

impl ChunkFeeder {
    /// Deliver one encoded chunk
    pub fn push(&self, chunk: Vec<u8>) {
        if let Ok(slot) = self.tx.lock() {
            if let Some(tx) = slot.as_ref() {
                let _ = tx.send(chunk);
            }
        }
    }
}

/// In-process audio input delivering chunks from a [`ChunkFeeder`].
///
/// The device is exclusive: at most one session is open at a time, and a
/// second open call fails as unavailable, matching a device held by another
/// session. Each open mints a fresh channel, so the input serves any number
/// of consecutive sessions.
pub struct ChannelAudioInput {
    tx: SenderSlot,
    unavailable_reason: Option<String>,
}

impl ChannelAudioInput {
    /// Create an input and the feeder that supplies its chunks
    pub fn new() -> (Self, ChunkFeeder) {
        let slot: SenderSlot = Arc::new(Mutex::new(None));
        (
            Self {
                tx: Arc::clone(&slot),
                unavailable_reason: None,
            },
            ChunkFeeder { tx: slot },
        )
    }

    /// Create an input whose device can never be acquired, as when
    /// permission is denied or no input device exists
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(None)),
            unavailable_reason: Some(reason.into()),
        }
    }
}

#[async_trait]
impl AudioInput for ChannelAudioInput {
    async fn open(&self) -> Result<Box<dyn InputSession>, DeviceError> {
        if let Some(reason) = &self.unavailable_reason {
            return Err(DeviceError::Unavailable(reason.clone()));
        }

        let mut slot = self
            .tx
            .lock()
            .map_err(|_| DeviceError::Stream("input state poisoned".to_string()))?;

        // A live sender means a session still holds the device; a closed
        // one means the previous session stopped or was dropped.
        if slot.as_ref().is_some_and(|tx| !tx.is_closed()) {
            return Err(DeviceError::Unavailable("input already in use".to_string()));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        *slot = Some(tx);
        Ok(Box::new(ChannelSession { rx }))
    }
}

struct ChannelSession {
    rx: mpsc::UnboundedReceiver<Vec<u8>>,
}

#[async_trait]
impl InputSession for ChannelSession {
    async fn next_chunk(&mut self) -> Option<Vec<u8>> {
        self.rx.recv().await
    }

    async fn stop(&mut self) -> Result<(), DeviceError> {
        // Rejects further sends; chunks already buffered stay retrievable
        // until recv returns None.
        self.rx.close();
        Ok(())
    }
}
