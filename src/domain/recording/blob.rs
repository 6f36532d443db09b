//! Recorded audio value objects

/// Content type of recorded audio blobs
pub const AUDIO_CONTENT_TYPE: &str = "audio/webm";

/// Ordered buffer of encoded audio chunks as delivered by the input device.
///
/// Chunks are append-only and concatenated in arrival order when finalized.
/// Reordering would corrupt the media container.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    chunks: Vec<Vec<u8>>,
}

impl ChunkBuffer {
    /// Create an empty chunk buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk. Empty chunks are discarded.
    pub fn push(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    /// Number of buffered chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total buffered bytes
    pub fn total_bytes(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Whether no audio data has been buffered
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Concatenate all chunks, in arrival order, into a finalized blob
    pub fn finalize(self) -> RecordedAudio {
        let mut data = Vec::with_capacity(self.total_bytes());
        for chunk in self.chunks {
            data.extend_from_slice(&chunk);
        }
        RecordedAudio::new(data)
    }
}

/// Value object representing one finalized recording, ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAudio {
    data: Vec<u8>,
}

impl RecordedAudio {
    /// Create from raw blob bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the raw blob bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw blob bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the content type of the blob
    pub fn content_type(&self) -> &'static str {
        AUDIO_CONTENT_TYPE
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the recording produced no data at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
