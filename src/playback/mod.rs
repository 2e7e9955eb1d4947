pub mod controller;
pub mod player;
pub mod state;

pub use controller::{PlaybackController, DEFAULT_CLIP_SECS};
pub use player::{PlayerState, VideoPlayer};
pub use state::{PlaybackMode, PlaybackSession};
