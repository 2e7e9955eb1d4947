use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackMode {
    Idle,
    PlayingBounded,
    Looping,
}

impl Default for PlaybackMode {
    fn default() -> Self {
        PlaybackMode::Idle
    }
}

/// Transient state for one play or loop request. Created when the user
/// triggers an action, wholly reset when the action is superseded, when
/// the player reports a pause/end, or when a bounded play runs out.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    pub mode: PlaybackMode,
    pub loop_start_sec: u64,
    pub loop_end_sec: u64,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_bounded(&mut self) {
        *self = Self {
            mode: PlaybackMode::PlayingBounded,
            ..Self::default()
        };
    }

    pub fn begin_loop(&mut self, start_sec: u64, end_sec: u64) {
        *self = Self {
            mode: PlaybackMode::Looping,
            loop_start_sec: start_sec,
            loop_end_sec: end_sec,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
