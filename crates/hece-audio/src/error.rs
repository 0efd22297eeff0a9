//! Error types for the audio layer.

use std::path::{Path, PathBuf};

use hece_lang::CodedError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while decoding, encoding or storing audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// A WAV file could not be decoded.
    #[error("failed to decode '{}': {message}", path.display())]
    Decode {
        /// File that failed.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// The sample store directory does not exist.
    #[error("sample store directory not found: {}", path.display())]
    StoreNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// The sample store holds no usable clips.
    #[error("sample store is empty: {reason}")]
    EmptyStore {
        /// Why nothing was loaded.
        reason: String,
    },

    /// A clip does not match the store's sample rate.
    #[error("clip '{key}' has sample rate {found} Hz, store expects {expected} Hz")]
    SampleRateMismatch {
        /// Syllable key of the clip.
        key: String,
        /// Store sample rate.
        expected: u32,
        /// Clip sample rate.
        found: u32,
    },

    /// Two clips share a syllable key.
    #[error("duplicate syllable key '{key}'")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a decode error for a file.
    pub fn decode(path: &Path, message: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Creates an empty store error.
    pub fn empty_store(reason: impl Into<String>) -> Self {
        Self::EmptyStore {
            reason: reason.into(),
        }
    }
}

impl CodedError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::Decode { .. } => "AUDIO_002",
            AudioError::StoreNotFound { .. } => "AUDIO_003",
            AudioError::EmptyStore { .. } => "AUDIO_004",
            AudioError::SampleRateMismatch { .. } => "AUDIO_005",
            AudioError::DuplicateKey { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::StoreNotFound { .. }
            | AudioError::EmptyStore { .. }
            | AudioError::SampleRateMismatch { .. }
            | AudioError::DuplicateKey { .. } => "store",
            _ => "audio",
        }
    }
}
