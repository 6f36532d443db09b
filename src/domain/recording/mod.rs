//! Recording domain module

mod blob;
mod session;

pub use blob::{ChunkBuffer, RecordedAudio, AUDIO_CONTENT_TYPE};
pub use session::{CaptureSession, CaptureState, InvalidStateTransition};
