//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod recording;
pub mod tasks;

// Re-export common types
pub use config::AppConfig;
pub use error::ConfigError;
pub use recording::{
    CaptureSession, CaptureState, ChunkBuffer, InvalidStateTransition, RecordedAudio,
    AUDIO_CONTENT_TYPE,
};
pub use tasks::{RelayOutput, Task, TranscriptResult};
