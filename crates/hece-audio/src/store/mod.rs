//! Read-only syllable sample store.
//!
//! The store maps syllable keys to recorded clips. It is built once, either
//! from in-memory clips or from a directory of WAV files via
//! [`StoreLoader`], and only read afterwards. Synthesizers borrow it.

mod loader;
mod sample_store;

pub use loader::{LoadFailure, LoadFailureReason, LoadedStore, StoreLoader};
pub use sample_store::SampleStore;

use crate::waveform::Waveform;

/// Lookup interface the synthesizer needs from a store.
pub trait SyllableSource {
    /// Returns true if a clip exists for `syllable`.
    fn has(&self, syllable: &str) -> bool;

    /// Returns the clip for `syllable`, if any.
    fn get(&self, syllable: &str) -> Option<&Waveform>;

    /// Returns every key in lexicographic order.
    fn all_keys(&self) -> Vec<&str>;

    /// Returns the sample rate shared by every clip.
    fn sample_rate(&self) -> u32;
}
