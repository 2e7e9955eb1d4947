/// Default pause threshold: a silence of 1.5 s or more in the captions is
/// taken as a break between choreography sections.
pub const DEFAULT_PAUSE_THRESHOLD_MS: u64 = 1500;

/// Tunable knobs for transcript segmentation.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Minimum gap (ms) between the end of one cue and the start of the
    /// next that forces a new segment. Zero is legal and splits at every
    /// non-overlapping cue pair.
    pub pause_threshold_ms: u64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            pause_threshold_ms: DEFAULT_PAUSE_THRESHOLD_MS,
        }
    }
}
