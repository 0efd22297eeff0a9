//! Hece Audio Layer
//!
//! This crate holds everything the synthesizer does with samples:
//!
//! - [`Waveform`] - immutable mono sample buffer with its sample rate
//! - [`ops`] - resampling pitch shift, linear crossfade, peak normalization
//! - [`store`] - the read-only syllable sample store and its directory loader
//! - [`wav`] - deterministic 16-bit PCM writer and `hound`-based reader
//!
//! # Determinism
//!
//! Every operation is a pure function of its inputs. Given the same store
//! and text, the synthesized PCM is byte-identical across runs, and
//! [`wav::WavResult::pcm_hash`] can be compared to detect regressions.
//!
//! # Example
//!
//! ```
//! use hece_audio::{ops, Waveform};
//!
//! let a = Waveform::new(vec![0.5; 400], 22050);
//! let b = Waveform::new(vec![0.5; 400], 22050);
//! let joined = a.crossfade(&b, 100);
//! assert_eq!(joined.len(), 700);
//! assert_eq!(ops::peak(joined.normalized(0.85).samples()), 0.85);
//! ```

pub mod error;
pub mod ops;
pub mod store;
pub mod waveform;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use store::{LoadFailure, LoadedStore, SampleStore, StoreLoader, SyllableSource};
pub use waveform::{seconds_to_samples, Waveform};
pub use wav::{WavFormat, WavResult};

/// Sample rate of every clip and every synthesized waveform, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;
