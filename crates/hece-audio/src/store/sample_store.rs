//! In-memory store implementation.

use std::collections::BTreeMap;

use super::SyllableSource;
use crate::error::{AudioError, AudioResult};
use crate::waveform::Waveform;

/// Immutable mapping from syllable text to a mono clip.
///
/// Keys are matched exactly as stored; callers are expected to case-fold
/// lookups the same way clip names were written.
#[derive(Debug, Clone)]
pub struct SampleStore {
    clips: BTreeMap<String, Waveform>,
    sample_rate: u32,
}

impl SampleStore {
    /// Builds a store from `(key, clip)` pairs.
    ///
    /// # Errors
    /// - [`AudioError::InvalidSampleRate`] if `sample_rate` is zero
    /// - [`AudioError::SampleRateMismatch`] if a clip has another rate
    /// - [`AudioError::DuplicateKey`] if a key appears twice
    /// - [`AudioError::EmptyStore`] if no clips are given
    pub fn from_clips<I>(sample_rate: u32, clips: I) -> AudioResult<Self>
    where
        I: IntoIterator<Item = (String, Waveform)>,
    {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }

        let mut map = BTreeMap::new();
        for (key, clip) in clips {
            if clip.sample_rate() != sample_rate {
                return Err(AudioError::SampleRateMismatch {
                    key,
                    expected: sample_rate,
                    found: clip.sample_rate(),
                });
            }
            if map.contains_key(&key) {
                return Err(AudioError::DuplicateKey { key });
            }
            map.insert(key, clip);
        }

        if map.is_empty() {
            return Err(AudioError::empty_store("no clips were provided"));
        }

        Ok(Self {
            clips: map,
            sample_rate,
        })
    }

    /// Returns the number of clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Returns true if the store has no clips. A constructed store never is.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Iterates over `(key, clip)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Waveform)> {
        self.clips.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the summed duration of every clip in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.clips.values().map(Waveform::duration_seconds).sum()
    }
}

impl SyllableSource for SampleStore {
    fn has(&self, syllable: &str) -> bool {
        self.clips.contains_key(syllable)
    }

    fn get(&self, syllable: &str) -> Option<&Waveform> {
        self.clips.get(syllable)
    }

    fn all_keys(&self) -> Vec<&str> {
        self.clips.keys().map(String::as_str).collect()
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
