//! Shared error reporting interface.
//!
//! Every library crate in the workspace defines its own `thiserror` enum and
//! implements [`CodedError`] for it, so front ends can print stable codes
//! without depending on each crate's concrete error type.

use serde::Serialize;

/// Common trait for pipeline errors.
///
/// # Example
///
/// ```ignore
/// use hece_lang::error::CodedError;
///
/// fn print_error<E: CodedError>(err: &E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait CodedError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "SYNTH_002". Codes are
    /// stable and can be matched on by scripts consuming `--json` output.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category ("audio", "store", "synth").
    fn category(&self) -> &'static str;
}

/// A serializable snapshot of any [`CodedError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// The error code (e.g., "AUDIO_001").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category.
    pub category: &'static str,
}

impl ErrorReport {
    /// Captures the code, message and category of an error.
    pub fn from_error<E: CodedError + ?Sized>(err: &E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
