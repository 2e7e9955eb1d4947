pub mod algorithm;
pub mod config;

#[cfg(test)]
mod tests;

pub use algorithm::{segment_transcript, Segment};
pub use config::{SegmenterConfig, DEFAULT_PAUSE_THRESHOLD_MS};
