use super::{segment_transcript, Segment, SegmenterConfig};
use crate::transcript::Cue;

fn config_with_threshold(pause_threshold_ms: u64) -> SegmenterConfig {
    SegmenterConfig { pause_threshold_ms }
}

#[test]
fn empty_transcript_yields_no_segments() {
    let segments = segment_transcript(&[], &SegmenterConfig::default());
    assert!(segments.is_empty());
}

#[test]
fn single_cue_yields_single_segment() {
    let cues = vec![Cue::new("annyeong", 4200, 800)];
    let segments = segment_transcript(&cues, &SegmenterConfig::default());
    assert_eq!(
        segments,
        vec![Segment {
            start_time_sec: 4,
            text: "annyeong".to_string(),
        }]
    );
}

#[test]
fn splits_at_long_pause() {
    // The worked example: 100 ms between the first two cues, 2000 ms
    // before the third.
    let cues = vec![
        Cue::new("hi", 0, 500),
        Cue::new("there", 600, 400),
        Cue::new("bye", 3000, 500),
    ];

    let segments = segment_transcript(&cues, &config_with_threshold(1500));
    assert_eq!(
        segments,
        vec![
            Segment {
                start_time_sec: 0,
                text: "hi there".to_string(),
            },
            Segment {
                start_time_sec: 3,
                text: "bye".to_string(),
            },
        ]
    );
}

#[test]
fn gap_exactly_at_threshold_is_a_boundary() {
    let cues = vec![Cue::new("a", 0, 500), Cue::new("b", 2000, 500)];
    let segments = segment_transcript(&cues, &config_with_threshold(1500));
    assert_eq!(segments.len(), 2);
}

#[test]
fn gap_just_under_threshold_is_not_a_boundary() {
    let cues = vec![Cue::new("a", 0, 500), Cue::new("b", 1999, 500)];
    let segments = segment_transcript(&cues, &config_with_threshold(1500));
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "a b");
}

#[test]
fn overlapping_cues_never_split() {
    // Second cue starts before the first ends: negative gap.
    let cues = vec![Cue::new("over", 0, 2000), Cue::new("lap", 1000, 1000)];
    let segments = segment_transcript(&cues, &config_with_threshold(0));
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "over lap");
}

#[test]
fn zero_threshold_splits_every_non_overlapping_pair() {
    let cues = vec![
        Cue::new("one", 0, 1000),
        Cue::new("two", 1000, 1000),
        Cue::new("three", 2500, 500),
    ];
    let segments = segment_transcript(&cues, &config_with_threshold(0));
    assert_eq!(segments.len(), 3);
}

#[test]
fn every_cue_lands_in_exactly_one_segment() {
    let cues = vec![
        Cue::new("a", 0, 100),
        Cue::new("b", 3000, 100),
        Cue::new("c", 3200, 100),
        Cue::new("d", 9000, 100),
        Cue::new("e", 9100, 100),
        Cue::new("f", 20000, 100),
    ];

    let segments = segment_transcript(&cues, &SegmenterConfig::default());

    // Concatenating segment texts in order reproduces the cue texts in
    // order, so no cue was dropped or duplicated.
    let rejoined = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(rejoined, "a b c d e f");
}

#[test]
fn start_times_are_non_decreasing() {
    let cues = vec![
        Cue::new("a", 0, 100),
        Cue::new("b", 5000, 100),
        Cue::new("c", 5100, 100),
        Cue::new("d", 12000, 100),
    ];

    let segments = segment_transcript(&cues, &SegmenterConfig::default());
    let starts: Vec<u64> = segments.iter().map(|s| s.start_time_sec).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

#[test]
fn segmentation_is_deterministic() {
    let cues = vec![
        Cue::new("a", 0, 400),
        Cue::new("b", 2500, 400),
        Cue::new("c", 2950, 400),
    ];
    let config = SegmenterConfig::default();

    let first = segment_transcript(&cues, &config);
    let second = segment_transcript(&cues, &config);
    assert_eq!(first, second);
}

#[test]
fn segment_start_floors_to_seconds() {
    let cues = vec![Cue::new("late", 1999, 100)];
    let segments = segment_transcript(&cues, &SegmenterConfig::default());
    assert_eq!(segments[0].start_time_sec, 1);
}
