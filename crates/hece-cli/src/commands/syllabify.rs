//! Syllabify command implementation
//!
//! Splits text into syllables without touching a store.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use hece_lang::{clean_word, syllabify, tokenize};

use super::json_output::{print_json, JsonOutput, SyllabifiedWord};

/// Run the syllabify command
///
/// # Arguments
/// * `words` - Text arguments, joined with spaces
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(words: &[String], json_output: bool) -> Result<ExitCode> {
    let result = split_text(&words.join(" "));

    if json_output {
        print_json(&JsonOutput::success(result))?;
    } else {
        for word in &result {
            println!(
                "{} {} {}",
                word.word,
                "->".dimmed(),
                word.syllables.join("-").cyan()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Cleans and syllabifies every word of `text`, skipping empty words.
pub(crate) fn split_text(text: &str) -> Vec<SyllabifiedWord> {
    tokenize(text)
        .iter()
        .filter_map(|token| token.as_word())
        .map(clean_word)
        .filter(|word| !word.is_empty())
        .map(|word| SyllabifiedWord {
            syllables: syllabify(&word),
            word,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_text() {
        let words = split_text("Kitap, araba 42!");
        assert_eq!(
            words,
            vec![
                SyllabifiedWord {
                    word: "Kitap".into(),
                    syllables: vec!["ki".into(), "tap".into()],
                },
                SyllabifiedWord {
                    word: "araba".into(),
                    syllables: vec!["a".into(), "ra".into(), "ba".into()],
                },
            ]
        );
    }
}
