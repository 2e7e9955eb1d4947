pub mod fetch;
pub mod video_id;

pub use fetch::{TranscriptError, TranscriptSource, YoutubeTranscriptClient};
pub use video_id::extract_video_id;

use serde::{Deserialize, Serialize};

/// One timestamped caption line as supplied by the transcript source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    pub text: String,
    pub offset_ms: u64,
    pub duration_ms: u64,
}

impl Cue {
    pub fn new(text: impl Into<String>, offset_ms: u64, duration_ms: u64) -> Self {
        Self {
            text: text.into(),
            offset_ms,
            duration_ms,
        }
    }

    /// Millisecond offset at which this cue stops being shown.
    pub fn end_ms(&self) -> u64 {
        self.offset_ms + self.duration_ms
    }
}
