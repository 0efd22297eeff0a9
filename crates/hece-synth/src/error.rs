//! Error types for synthesis.

use hece_audio::AudioError;
use hece_lang::CodedError;
use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that abort a synthesis call.
///
/// Missing syllables are not errors; they are replaced with silence and
/// listed in the coverage report.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid configuration value.
    #[error("invalid config '{name}': {message}")]
    InvalidConfig {
        /// Config field name.
        name: &'static str,
        /// Error message.
        message: String,
    },

    /// The config file could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The store was recorded at another rate than the config expects.
    #[error("sample store rate is {store} Hz but config expects {config} Hz")]
    SampleRateMismatch {
        /// Store sample rate.
        store: u32,
        /// Configured sample rate.
        config: u32,
    },

    /// The text produced no audio segments.
    #[error("nothing to synthesize: text contains no words or punctuation")]
    NothingToSynthesize,

    /// Error from the audio layer.
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid config error.
    pub fn invalid_config(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name,
            message: message.into(),
        }
    }
}

impl CodedError for SynthError {
    fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidConfig { .. } => "SYNTH_001",
            SynthError::ConfigParse(_) => "SYNTH_002",
            SynthError::SampleRateMismatch { .. } => "SYNTH_003",
            SynthError::NothingToSynthesize => "SYNTH_004",
            SynthError::Audio(e) => e.code(),
            SynthError::Io(_) => "SYNTH_005",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            SynthError::Audio(e) => e.category(),
            _ => "synth",
        }
    }
}
