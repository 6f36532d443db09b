//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the processing service, and HTTP.

pub mod capture;
pub mod client;
pub mod config;
pub mod processing;
pub mod server;
pub mod storage;

// Re-export adapters
pub use capture::{ChannelAudioInput, ChunkFeeder};
pub use client::HttpRelayClient;
pub use config::TomlConfigStore;
pub use processing::HttpProcessingClient;
pub use storage::FsAudioStore;
