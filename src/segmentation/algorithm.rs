use serde::Serialize;

use crate::segmentation::config::SegmenterConfig;
use crate::transcript::Cue;

/// A contiguous run of cues merged into one learning unit, bounded by long
/// pauses in the captions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_time_sec: u64,
    pub text: String,
}

/// Tracks the segment being accumulated during the pass.
struct OpenSegment {
    start_ms: u64,
    texts: Vec<String>,
}

/// Main segmentation function: partitions an ordered cue sequence into
/// segments, starting a new one wherever the silence between consecutive
/// cues meets the pause threshold.
///
/// Single linear pass, no side effects. Every cue lands in exactly one
/// segment and order is preserved. Cues are trusted to arrive ordered by
/// offset; an overlapping pair just yields a negative gap, which is never
/// a boundary.
pub fn segment_transcript(cues: &[Cue], config: &SegmenterConfig) -> Vec<Segment> {
    // Edge case: empty transcript
    if cues.is_empty() {
        return Vec::new();
    }

    let mut closed: Vec<OpenSegment> = Vec::new();
    let mut current = OpenSegment {
        start_ms: cues[0].offset_ms,
        texts: Vec::new(),
    };

    for (i, cue) in cues.iter().enumerate() {
        current.texts.push(cue.text.clone());

        if let Some(next) = cues.get(i + 1) {
            let gap_ms = next.offset_ms as i64 - cue.end_ms() as i64;
            if gap_ms >= config.pause_threshold_ms as i64 {
                closed.push(current);
                current = OpenSegment {
                    start_ms: next.offset_ms,
                    texts: Vec::new(),
                };
            }
        }
    }

    // The trailing segment always has at least the last cue's text
    if !current.texts.is_empty() {
        closed.push(current);
    }

    closed
        .into_iter()
        .map(|seg| Segment {
            start_time_sec: seg.start_ms / 1000,
            text: seg.texts.join(" "),
        })
        .collect()
}
