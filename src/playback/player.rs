use serde::{Deserialize, Serialize};

/// Playback states reported by the external player surface. Mirrors the
/// YouTube IFrame player's state set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PlayerState {
    Unstarted,
    Playing,
    Paused,
    Buffering,
    Ended,
}

/// Capability surface of the external video player.
///
/// Commands are fire-and-forget: the controller never verifies that a
/// seek or play took effect, it only reads back `state` and
/// `current_time` when it needs to decide something. Implemented by a
/// deterministic double in tests.
pub trait VideoPlayer: Send + Sync + 'static {
    fn seek(&self, time_sec: f64);
    fn play(&self);
    fn pause(&self);
    fn current_time(&self) -> f64;
    fn state(&self) -> PlayerState;
}
