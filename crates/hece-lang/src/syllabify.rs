//! Vowel-anchored syllabification.
//!
//! Every Turkish syllable holds exactly one vowel, so the word is cut between
//! each pair of neighbouring vowels according to the size of the consonant
//! cluster separating them:
//!
//! | Consonants between vowels | Cut position            | Example          |
//! |---------------------------|-------------------------|------------------|
//! | 0                         | right after the vowel   | `sa-at`          |
//! | 1                         | right after the vowel   | `ki-tap`         |
//! | 2 or more                 | after first consonant   | `son-ra`         |
//!
//! Everything after the last vowel stays in the final syllable.

use crate::case::{is_vowel, turkish_lower};

/// Splits Turkish words into syllables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Syllabifier;

impl Syllabifier {
    /// Syllabifies a single word. See [`syllabify`].
    pub fn syllabify(word: &str) -> Vec<String> {
        syllabify(word)
    }
}

/// Splits a word into case-folded syllables.
///
/// The concatenation of the returned syllables always equals
/// `turkish_lower(word)`. An empty word yields no syllables and a word without
/// vowels is returned whole as a single syllable.
pub fn syllabify(word: &str) -> Vec<String> {
    let chars: Vec<char> = turkish_lower(word).chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let vowel_positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, &ch)| is_vowel(ch))
        .map(|(i, _)| i)
        .collect();

    if vowel_positions.is_empty() {
        return vec![chars.iter().collect()];
    }

    let mut syllables = Vec::with_capacity(vowel_positions.len());
    let mut start = 0;

    for pair in vowel_positions.windows(2) {
        let (vowel, next_vowel) = (pair[0], pair[1]);
        let cluster_len = next_vowel - vowel - 1;

        let end = match cluster_len {
            0 | 1 => vowel + 1,
            _ => vowel + 2,
        };

        syllables.push(chars[start..end].iter().collect());
        start = end;
    }

    // The cut never passes the last vowel, so the tail is never empty.
    syllables.push(chars[start..].iter().collect());

    syllables
}
