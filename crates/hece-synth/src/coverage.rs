//! Store coverage of a text's syllables.

use hece_audio::SyllableSource;
use hece_lang::{clean_word, syllabify, tokenize, Token};
use serde::Serialize;

/// How many of a text's syllables the store can voice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    /// Number of syllables in the text, repeats included.
    pub total: usize,
    /// Syllables without a clip, first occurrence order, no repeats.
    pub missing: Vec<String>,
    /// `(total - missing.len()) / total * 100`, or 0 for a text without syllables.
    pub coverage: f64,
}

impl CoverageReport {
    /// Builds a report from counts, guarding the empty case.
    pub fn new(total: usize, missing: Vec<String>) -> Self {
        let coverage = if total == 0 {
            0.0
        } else {
            total.saturating_sub(missing.len()) as f64 / total as f64 * 100.0
        };
        Self {
            total,
            missing,
            coverage,
        }
    }

    /// Returns true if every syllable has a clip.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Checks every word of `text` against the store.
///
/// Punctuation is ignored; words are cleaned of non-alphabetic characters
/// and syllabified exactly as the synthesizer would.
pub fn check_coverage<S: SyllableSource + ?Sized>(text: &str, store: &S) -> CoverageReport {
    let mut total = 0;
    let mut missing: Vec<String> = Vec::new();

    for token in tokenize(text) {
        let Token::Word(raw) = token else {
            continue;
        };
        for syllable in syllabify(&clean_word(&raw)) {
            total += 1;
            if !store.has(&syllable) && !missing.contains(&syllable) {
                missing.push(syllable);
            }
        }
    }

    CoverageReport::new(total, missing)
}
