//! Text tokenization into words and punctuation marks.

use serde::{Deserialize, Serialize};

/// Punctuation marks that produce pauses in synthesized speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Punctuation {
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `!`
    Exclamation,
    /// `?`
    Question,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
}

/// Pause length class of a punctuation mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseClass {
    /// Sentence-final marks (`.`, `!`, `?`).
    Period,
    /// Clause-internal marks (`,`, `;`, `:`).
    Comma,
}

impl Punctuation {
    /// All recognized marks.
    pub const ALL: [Punctuation; 6] = [
        Punctuation::Period,
        Punctuation::Comma,
        Punctuation::Exclamation,
        Punctuation::Question,
        Punctuation::Semicolon,
        Punctuation::Colon,
    ];

    /// Parses a punctuation character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Period),
            ',' => Some(Self::Comma),
            '!' => Some(Self::Exclamation),
            '?' => Some(Self::Question),
            ';' => Some(Self::Semicolon),
            ':' => Some(Self::Colon),
            _ => None,
        }
    }

    /// Returns the character for this mark.
    pub fn as_char(self) -> char {
        match self {
            Self::Period => '.',
            Self::Comma => ',',
            Self::Exclamation => '!',
            Self::Question => '?',
            Self::Semicolon => ';',
            Self::Colon => ':',
        }
    }

    /// Returns the pause class of this mark.
    pub fn pause_class(self) -> PauseClass {
        match self {
            Self::Period | Self::Exclamation | Self::Question => PauseClass::Period,
            Self::Comma | Self::Semicolon | Self::Colon => PauseClass::Comma,
        }
    }
}

impl std::fmt::Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A unit of input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Raw word text, possibly still containing digits or symbols.
    Word(String),
    /// A pause-producing punctuation mark.
    Punctuation(Punctuation),
}

impl Token {
    /// Returns the raw word text, if this is a word.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w),
            Token::Punctuation(_) => None,
        }
    }
}

/// Splits text into word and punctuation tokens.
///
/// Punctuation marks are isolated on both sides, so `"evde,kitap."` yields
/// `evde`, `,`, `kitap`, `.`. Everything else is split on whitespace.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if let Some(mark) = Punctuation::from_char(ch) {
            flush_word(&mut current, &mut tokens);
            tokens.push(Token::Punctuation(mark));
        } else if ch.is_whitespace() {
            flush_word(&mut current, &mut tokens);
        } else {
            current.push(ch);
        }
    }
    flush_word(&mut current, &mut tokens);

    tokens
}

fn flush_word(current: &mut String, tokens: &mut Vec<Token>) {
    if !current.is_empty() {
        tokens.push(Token::Word(std::mem::take(current)));
    }
}

/// Strips every non-alphabetic character from a raw word.
pub fn clean_word(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphabetic()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    fn punct(ch: char) -> Token {
        Token::Punctuation(Punctuation::from_char(ch).unwrap())
    }

    #[test]
    fn test_tokenize_sentence() {
        let tokens = tokenize("Baba evde kitap okuyor.");
        assert_eq!(
            tokens,
            vec![
                word("Baba"),
                word("evde"),
                word("kitap"),
                word("okuyor"),
                punct('.'),
            ]
        );
    }

    #[test]
    fn test_punctuation_isolated_both_sides() {
        assert_eq!(
            tokenize("evde,kitap;masa"),
            vec![
                word("evde"),
                punct(','),
                word("kitap"),
                punct(';'),
                word("masa"),
            ]
        );
    }

    #[test]
    fn test_repeated_punctuation() {
        assert_eq!(
            tokenize("ne?!"),
            vec![word("ne"), punct('?'), punct('!')]
        );
    }

    #[test]
    fn test_whitespace_variants() {
        assert_eq!(
            tokenize("  ev\tbahçe\nyol  "),
            vec![word("ev"), word("bahçe"), word("yol")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_other_symbols_stay_in_word() {
        assert_eq!(tokenize("ev'de 3kitap"), vec![word("ev'de"), word("3kitap")]);
    }

    #[test]
    fn test_clean_word() {
        assert_eq!(clean_word("ev'de"), "evde");
        assert_eq!(clean_word("3kitap"), "kitap");
        assert_eq!(clean_word("123"), "");
        assert_eq!(clean_word("Güneş"), "Güneş");
    }

    #[test]
    fn test_pause_classes() {
        use PauseClass::*;
        let classes: Vec<PauseClass> = Punctuation::ALL.iter().map(|p| p.pause_class()).collect();
        assert_eq!(classes, vec![Period, Comma, Period, Period, Comma, Comma]);
    }

    #[test]
    fn test_char_round_trip() {
        for mark in Punctuation::ALL {
            assert_eq!(Punctuation::from_char(mark.as_char()), Some(mark));
        }
        assert_eq!(Punctuation::from_char('-'), None);
    }

    #[test]
    fn test_token_serializes_tagged() {
        let json = serde_json::to_value(punct(',')).unwrap();
        assert_eq!(json["kind"], "punctuation");
        assert_eq!(json["value"], "comma");
    }
}
