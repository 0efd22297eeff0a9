//! Examples command implementation

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use hece_synth::EXAMPLE_SENTENCES;
use serde::Serialize;

use super::json_output::{print_json, JsonOutput};

/// One numbered example sentence.
#[derive(Debug, Serialize)]
pub struct ExampleSentence {
    /// 1-based number accepted by `--example`
    pub number: usize,
    /// Sentence text
    pub text: &'static str,
}

/// Run the examples command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let examples: Vec<_> = EXAMPLE_SENTENCES
        .iter()
        .copied()
        .enumerate()
        .map(|(i, text)| ExampleSentence { number: i + 1, text })
        .collect();

    if json_output {
        print_json(&JsonOutput::success(examples))?;
    } else {
        println!("{}", "Example sentences:".cyan().bold());
        for example in &examples {
            println!("  {} {}", format!("{}.", example.number).dimmed(), example.text);
        }
        println!();
        println!(
            "{}",
            "Use `hece synthesize --example N` to synthesize one.".dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
