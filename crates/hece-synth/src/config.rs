//! Synthesis settings.
//!
//! All fields have defaults, so a config file only needs to name what it
//! changes:
//!
//! ```json
//! { "pitch_shift": 11.0, "period_pause": 0.5 }
//! ```

use std::path::Path;

use hece_audio::{seconds_to_samples, DEFAULT_SAMPLE_RATE};
use hece_lang::{PauseClass, Punctuation};
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Largest accepted pitch shift magnitude, in semitones (two octaves).
///
/// Resampling scales clip length by `2^(-s/12)`, so the bound also caps
/// every clip at four times its recorded length.
pub const MAX_PITCH_SHIFT: f64 = 24.0;

/// Parameters controlling how clips are joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthConfig {
    /// Pitch shift applied to every clip, in semitones. Also changes duration.
    #[serde(default)]
    pub pitch_shift: f64,
    /// Crossfade length between consecutive segments, in milliseconds.
    #[serde(default = "default_crossfade_ms")]
    pub crossfade_ms: f64,
    /// Silence appended after every word, in seconds.
    #[serde(default = "default_word_pause")]
    pub word_pause: f64,
    /// Pause for `,`, `;` and `:`, in seconds.
    #[serde(default = "default_comma_pause")]
    pub comma_pause: f64,
    /// Pause for `.`, `!` and `?`, in seconds.
    #[serde(default = "default_period_pause")]
    pub period_pause: f64,
    /// Silence substituted for a syllable missing from the store, in seconds.
    #[serde(default = "default_missing_syllable_silence")]
    pub missing_syllable_silence: f64,
    /// Peak each clip is normalized to before merging.
    #[serde(default = "default_syllable_peak")]
    pub syllable_peak: f64,
    /// Peak of the final merged output.
    #[serde(default = "default_output_peak")]
    pub output_peak: f64,
    /// Sample rate of the store and the output, in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_crossfade_ms() -> f64 {
    25.0
}

fn default_word_pause() -> f64 {
    0.08
}

fn default_comma_pause() -> f64 {
    0.15
}

fn default_period_pause() -> f64 {
    0.35
}

fn default_missing_syllable_silence() -> f64 {
    0.15
}

fn default_syllable_peak() -> f64 {
    0.8
}

fn default_output_peak() -> f64 {
    0.85
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            pitch_shift: 0.0,
            crossfade_ms: default_crossfade_ms(),
            word_pause: default_word_pause(),
            comma_pause: default_comma_pause(),
            period_pause: default_period_pause(),
            missing_syllable_silence: default_missing_syllable_silence(),
            syllable_peak: default_syllable_peak(),
            output_peak: default_output_peak(),
            sample_rate: default_sample_rate(),
        }
    }
}

impl SynthConfig {
    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> SynthResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: &Path) -> SynthResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Returns a copy with a different pitch shift.
    pub fn with_pitch_shift(mut self, semitones: f64) -> Self {
        self.pitch_shift = semitones;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> SynthResult<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::invalid_config("sample_rate", "must be > 0"));
        }
        if !self.pitch_shift.is_finite() || self.pitch_shift.abs() > MAX_PITCH_SHIFT {
            return Err(SynthError::invalid_config(
                "pitch_shift",
                format!(
                    "must be within [-{max}, {max}] semitones, got {}",
                    self.pitch_shift,
                    max = MAX_PITCH_SHIFT
                ),
            ));
        }

        let durations = [
            ("crossfade_ms", self.crossfade_ms),
            ("word_pause", self.word_pause),
            ("comma_pause", self.comma_pause),
            ("period_pause", self.period_pause),
            ("missing_syllable_silence", self.missing_syllable_silence),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(SynthError::invalid_config(
                    name,
                    format!("must be a finite value >= 0, got {}", value),
                ));
            }
        }

        for (name, value) in [
            ("syllable_peak", self.syllable_peak),
            ("output_peak", self.output_peak),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(SynthError::invalid_config(
                    name,
                    format!("must be in (0, 1], got {}", value),
                ));
            }
        }

        Ok(())
    }

    /// Crossfade length in samples, truncated.
    pub fn overlap_samples(&self) -> usize {
        seconds_to_samples(self.crossfade_ms / 1000.0, self.sample_rate)
    }

    /// Pause length in seconds for a punctuation mark.
    pub fn pause_for(&self, mark: Punctuation) -> f64 {
        match mark.pause_class() {
            PauseClass::Period => self.period_pause,
            PauseClass::Comma => self.comma_pause,
        }
    }
}
