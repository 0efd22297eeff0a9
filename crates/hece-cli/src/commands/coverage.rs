//! Coverage command implementation
//!
//! Reports which syllables of a text the store has no clip for.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use hece_audio::{StoreLoader, SyllableSource};
use hece_synth::{SynthConfig, Synthesizer};

use super::json_output::{
    error_to_json, input_error_to_json, print_json, CoverageResult, JsonOutput,
};
use super::reporting::{print_breakdown, print_coverage, print_load_failures};
use crate::cli_args::TextSource;

/// Run the coverage command
///
/// # Returns
/// Exit code: 0 if the report was produced (even with missing syllables),
/// 1 on failure
pub fn run(store_dir: &Path, source: &TextSource, json_output: bool) -> Result<ExitCode> {
    let text = match source.resolve() {
        Ok(text) => text,
        Err(e) if json_output => {
            print_json(&JsonOutput::<CoverageResult>::failure(vec![
                input_error_to_json(&e),
            ]))?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    if !json_output {
        println!("{} {}", "Checking:".cyan().bold(), text);
        println!("{} {}", "Store:".dimmed(), store_dir.display());
    }

    match check(store_dir, &text, json_output) {
        Ok(result) if json_output => {
            print_json(&JsonOutput::success(result))?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(result) => {
            println!();
            print_breakdown(&result.words);
            print_coverage(&result.report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if json_output => {
            print_json(&JsonOutput::<CoverageResult>::failure(vec![error_to_json(&e)]))?;
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e),
    }
}

fn check(store_dir: &Path, text: &str, json_output: bool) -> Result<CoverageResult> {
    let loaded = StoreLoader::new(store_dir).load()?;
    if !json_output {
        print_load_failures(&loaded.failures);
    }

    let config = SynthConfig {
        sample_rate: loaded.store.sample_rate(),
        ..SynthConfig::default()
    };
    let synth = Synthesizer::new(&loaded.store, config)?;

    Ok(CoverageResult {
        text: text.to_string(),
        report: synth.coverage(text),
        words: synth.syllabify_text(text),
    })
}
