//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints exactly one of these objects to
//! stdout. Library errors keep their own stable codes (`AUDIO_00x`,
//! `SYNTH_00x`); errors raised by the CLI itself use the `CLI_00x` codes.

use std::path::Path;

use hece_audio::{AudioError, LoadFailure};
use hece_lang::ErrorReport;
use hece_synth::{CoverageReport, SynthError, WordBreakdown};
use serde::Serialize;

/// Error codes for CLI operations.
pub mod error_codes {
    /// Input text file could not be read, or the example number is unknown
    pub const INPUT: &str = "CLI_001";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_002";
    /// Any other failure
    pub const OTHER: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category ("cli", "audio", "store", "synth")
    pub category: String,
}

impl JsonError {
    /// Creates a CLI-level error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: "cli".to_string(),
        }
    }
}

impl From<ErrorReport> for JsonError {
    fn from(report: ErrorReport) -> Self {
        Self {
            code: report.code.to_string(),
            message: report.message,
            category: report.category.to_string(),
        }
    }
}

/// Converts an error from any layer into a JSON error, keeping library codes.
pub fn error_to_json(err: &anyhow::Error) -> JsonError {
    if let Some(e) = err.downcast_ref::<SynthError>() {
        return ErrorReport::from_error(e).into();
    }
    if let Some(e) = err.downcast_ref::<AudioError>() {
        return ErrorReport::from_error(e).into();
    }
    JsonError::new(error_codes::OTHER, format!("{:#}", err))
}

/// Converts an input-resolution error.
pub fn input_error_to_json(err: &anyhow::Error) -> JsonError {
    JsonError::new(error_codes::INPUT, format!("{:#}", err))
}

/// Envelope shared by every JSON command output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command-specific payload (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> JsonOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Result payload for `synthesize`.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesizeResult {
    /// Written WAV path
    pub output: String,
    /// Synthesized text
    pub text: String,
    /// Pitch shift in semitones
    pub pitch_shift: f64,
    /// Output duration in seconds
    pub duration_seconds: f64,
    /// Output sample count
    pub num_samples: usize,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
    /// Number of merged segments
    pub segment_count: usize,
    /// Coverage of the text
    pub coverage: CoverageReport,
    /// Per-word syllable breakdown
    pub words: Vec<WordBreakdown>,
    /// Clips skipped while loading the store
    pub load_failures: Vec<LoadFailure>,
}

/// Result payload for `coverage`.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageResult {
    /// Checked text
    pub text: String,
    /// Coverage report
    #[serde(flatten)]
    pub report: CoverageReport,
    /// Per-word syllable breakdown
    pub words: Vec<WordBreakdown>,
}

/// One word in `syllabify` output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SyllabifiedWord {
    /// Cleaned word
    pub word: String,
    /// Its syllables
    pub syllables: Vec<String>,
}

/// Result payload for `list`.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    /// Store directory
    pub store: String,
    /// Number of syllables
    pub total: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Summed clip duration in seconds
    pub total_duration_seconds: f64,
    /// Every syllable key in order
    pub syllables: Vec<String>,
    /// Clips skipped while loading
    pub load_failures: Vec<LoadFailure>,
}

/// Displays a path the same way in every JSON payload.
pub fn path_string(path: &Path) -> String {
    path.display().to_string()
}

/// Prints a JSON value to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        anyhow::anyhow!("[{}] {}", error_codes::JSON_SERIALIZE, e)
    })?;
    println!("{}", json);
    Ok(())
}
