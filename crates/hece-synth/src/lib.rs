//! Hece Synthesizer
//!
//! Concatenative Turkish speech synthesis from recorded syllable clips.
//! Text is tokenized and syllabified by [`hece_lang`], every syllable is
//! looked up in a [`hece_audio::SyllableSource`], and the clips are
//! crossfaded into a single waveform.
//!
//! # Example
//!
//! ```
//! use hece_audio::{SampleStore, Waveform};
//! use hece_synth::{SynthConfig, Synthesizer};
//!
//! let clip = |n| Waveform::new(vec![0.3; n], 22050);
//! let store = SampleStore::from_clips(
//!     22050,
//!     [("ki".to_string(), clip(3000)), ("tap".to_string(), clip(4000))],
//! )
//! .unwrap();
//!
//! let synth = Synthesizer::new(&store, SynthConfig::default()).unwrap();
//! let out = synth.synthesize("kitap.").unwrap();
//! assert_eq!(out.coverage.coverage, 100.0);
//! assert!((out.waveform.peak() - 0.85).abs() < 1e-12);
//! ```

pub mod config;
pub mod coverage;
pub mod error;
pub mod segment;
pub mod sentences;
pub mod synthesizer;

pub use config::{SynthConfig, MAX_PITCH_SHIFT};
pub use coverage::{check_coverage, CoverageReport};
pub use error::{SynthError, SynthResult};
pub use segment::{merge_segments, Segment, SegmentKind};
pub use sentences::{example, DEFAULT_TEXT, EXAMPLE_SENTENCES};
pub use synthesizer::{SyllableStatus, Synthesis, Synthesizer, WordBreakdown};
