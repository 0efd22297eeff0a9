//! Audio segments and their left-to-right merge.

use hece_audio::Waveform;
use serde::Serialize;

/// What produced a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// A pitch-adjusted, normalized clip from the store.
    Syllable,
    /// Silence standing in for a syllable the store lacks.
    MissingSyllable,
    /// Silence after a word.
    WordPause,
    /// Silence for a punctuation mark.
    PunctuationPause,
}

/// One piece of the output before merging.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Origin of the segment.
    pub kind: SegmentKind,
    /// Segment audio.
    pub waveform: Waveform,
}

impl Segment {
    /// Creates a segment.
    pub fn new(kind: SegmentKind, waveform: Waveform) -> Self {
        Self { kind, waveform }
    }
}

/// Crossfades segments together strictly left to right.
///
/// Crossfading is not associative, so the fold order is part of the output
/// definition. Returns `None` when there are no segments.
pub fn merge_segments(segments: &[Segment], overlap_samples: usize) -> Option<Waveform> {
    let (first, rest) = segments.split_first()?;
    Some(rest.iter().fold(first.waveform.clone(), |merged, segment| {
        merged.crossfade(&segment.waveform, overlap_samples)
    }))
}
