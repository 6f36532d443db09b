//! Transcript and task wire types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// An action item extracted from a transcript.
///
/// The id is assigned by the processing service and stays stable for the
/// session; it is the only valid key for locating a task (descriptions may
/// collide).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, `_id` on the wire
    #[serde(rename = "_id")]
    pub id: String,
    /// Task description
    pub task: String,
    /// Optional deadline, as a date string
    #[serde(default)]
    pub deadline: Option<String>,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

/// Result returned by the processing service for one uploaded recording.
/// Immutable after creation; the relay passes it through without storing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Transcript text
    pub text: String,
    /// Extracted action items
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Name of the downloadable transcript file
    pub txt_file: String,
}

/// Normalized result the relay returns to the upload caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayOutput {
    /// Transcript text
    pub text: String,
    /// Extracted action items
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Path of the persisted audio file on the relay
    pub audio_file: PathBuf,
    /// Name of the downloadable transcript file
    pub txt_file: String,
}
