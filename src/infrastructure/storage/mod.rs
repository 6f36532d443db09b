//! Storage infrastructure module

mod fs;

pub use fs::FsAudioStore;
