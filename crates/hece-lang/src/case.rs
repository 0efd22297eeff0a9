//! Turkish case folding and vowel classification.

/// Vowels of the Turkish alphabet, lowercase and uppercase forms.
pub const VOWELS: [char; 16] = [
    'a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü', 'A', 'E', 'I', 'İ', 'O', 'Ö', 'U', 'Ü',
];

/// Returns true if `ch` is a Turkish vowel (dotted or dotless, any case).
#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Lowercases text using Turkish rules.
///
/// Generic lowercasing maps `I` to dotted `i` and `İ` to `i` followed by a
/// combining dot (U+0307). Turkish needs `I` -> `ı` and `İ` -> `i`, so those
/// two letters are substituted directly and every other character goes
/// through [`char::to_lowercase`].
pub fn turkish_lower(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}
