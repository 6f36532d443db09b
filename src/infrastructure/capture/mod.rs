//! Capture infrastructure module

mod channel;

pub use channel::{ChannelAudioInput, ChunkFeeder};
