use crate::segmentation::DEFAULT_PAUSE_THRESHOLD_MS;
use crate::playback::DEFAULT_CLIP_SECS;

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Preferred caption language requested from the transcript source.
    pub preferred_lang: String,
    /// Minimum inter-cue silence (ms) that starts a new segment.
    pub pause_threshold_ms: u64,
    /// Length of a bounded play / loop window in seconds. One eight-count
    /// at typical K-pop tempo is about 8 seconds.
    pub clip_duration_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            preferred_lang: "ko".to_string(),
            pause_threshold_ms: DEFAULT_PAUSE_THRESHOLD_MS,
            clip_duration_secs: DEFAULT_CLIP_SECS,
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            preferred_lang: std::env::var("DANCELOOP_LANG")
                .unwrap_or(defaults.preferred_lang),
            pause_threshold_ms: std::env::var("DANCELOOP_PAUSE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.pause_threshold_ms),
            clip_duration_secs: std::env::var("DANCELOOP_CLIP_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.clip_duration_secs),
        }
    }
}
