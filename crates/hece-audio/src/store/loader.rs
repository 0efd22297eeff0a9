//! Builds a [`SampleStore`] from a directory of syllable clips.
//!
//! Each `<syllable>.wav` file in the top level of the directory becomes one
//! entry keyed by its file stem. Files that cannot be used are recorded as
//! [`LoadFailure`]s rather than aborting the load; the load only fails when
//! nothing usable remains.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use super::SampleStore;
use crate::error::{AudioError, AudioResult};
use crate::wav::read_wav_mono;
use crate::DEFAULT_SAMPLE_RATE;

/// Why a single clip was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadFailureReason {
    /// The directory entry could not be read.
    Unreadable { message: String },
    /// The file name is not valid UTF-8, so it cannot be a syllable key.
    NonUtf8Name,
    /// The WAV decoder rejected the file.
    Decode { message: String },
    /// The clip's sample rate differs from the store's.
    SampleRateMismatch { expected: u32, found: u32 },
    /// Another file already provided this key.
    DuplicateKey { key: String },
}

impl std::fmt::Display for LoadFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable { message } => write!(f, "unreadable entry: {}", message),
            Self::NonUtf8Name => write!(f, "file name is not valid UTF-8"),
            Self::Decode { message } => write!(f, "decode failed: {}", message),
            Self::SampleRateMismatch { expected, found } => {
                write!(f, "sample rate {} Hz, expected {} Hz", found, expected)
            }
            Self::DuplicateKey { key } => write!(f, "duplicate syllable key '{}'", key),
        }
    }
}

/// A clip that was skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    /// File that was skipped.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: LoadFailureReason,
}

/// A loaded store plus every file that was skipped.
#[derive(Debug)]
pub struct LoadedStore {
    /// The usable store.
    pub store: SampleStore,
    /// Skipped files, in file-name order.
    pub failures: Vec<LoadFailure>,
}

/// Loads syllable clips from a directory.
///
/// # Example
///
/// ```ignore
/// use hece_audio::store::{StoreLoader, SyllableSource};
///
/// let loaded = StoreLoader::new("ses dosyaları").load()?;
/// println!("{} syllables, {} skipped", loaded.store.len(), loaded.failures.len());
/// ```
#[derive(Debug, Clone)]
pub struct StoreLoader {
    dir: PathBuf,
    sample_rate: u32,
}

impl StoreLoader {
    /// Creates a loader for `dir` expecting [`DEFAULT_SAMPLE_RATE`] clips.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Sets the sample rate every clip must have.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Returns the directory being loaded.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Scans the directory and decodes every `.wav` file.
    ///
    /// # Errors
    /// - [`AudioError::StoreNotFound`] if the directory does not exist
    /// - [`AudioError::EmptyStore`] if it holds no `.wav` files, or none of
    ///   them could be loaded
    pub fn load(&self) -> AudioResult<LoadedStore> {
        if !self.dir.is_dir() {
            return Err(AudioError::StoreNotFound {
                path: self.dir.clone(),
            });
        }

        let mut failures = Vec::new();
        let mut wav_paths = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_wav(entry.path()) => {
                    wav_paths.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => failures.push(LoadFailure {
                    path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.dir.clone()),
                    reason: LoadFailureReason::Unreadable {
                        message: e.to_string(),
                    },
                }),
            }
        }

        if wav_paths.is_empty() {
            return Err(AudioError::empty_store(format!(
                "no .wav files in '{}'",
                self.dir.display()
            )));
        }

        let mut clips = Vec::with_capacity(wav_paths.len());
        for path in wav_paths {
            match self.load_clip(&path, &clips) {
                Ok(entry) => clips.push(entry),
                Err(reason) => failures.push(LoadFailure { path, reason }),
            }
        }

        for failure in &failures {
            tracing::warn!(
                path = %failure.path.display(),
                reason = %failure.reason,
                "skipping syllable clip"
            );
        }

        if clips.is_empty() {
            return Err(AudioError::empty_store(format!(
                "none of the .wav files in '{}' could be loaded ({} failed)",
                self.dir.display(),
                failures.len()
            )));
        }

        let store = SampleStore::from_clips(self.sample_rate, clips)?;
        tracing::info!(
            dir = %self.dir.display(),
            syllables = store.len(),
            skipped = failures.len(),
            "loaded sample store"
        );

        Ok(LoadedStore { store, failures })
    }

    fn load_clip(
        &self,
        path: &Path,
        loaded: &[(String, crate::Waveform)],
    ) -> Result<(String, crate::Waveform), LoadFailureReason> {
        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or(LoadFailureReason::NonUtf8Name)?
            .to_string();

        if loaded.iter().any(|(k, _)| *k == key) {
            return Err(LoadFailureReason::DuplicateKey { key });
        }

        let clip = read_wav_mono(path).map_err(|e| LoadFailureReason::Decode {
            message: match e {
                AudioError::Decode { message, .. } => message,
                other => other.to_string(),
            },
        })?;

        if clip.sample_rate() != self.sample_rate {
            return Err(LoadFailureReason::SampleRateMismatch {
                expected: self.sample_rate,
                found: clip.sample_rate(),
            });
        }

        Ok((key, clip))
    }
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
}
