//! Doctor command implementation
//!
//! Checks that a store directory is usable and how well it covers the
//! built-in example sentences.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use hece_audio::{StoreLoader, SyllableSource};
use hece_synth::{check_coverage, EXAMPLE_SENTENCES};

/// Single-vowel syllables; nearly every text needs them.
const VOWEL_SYLLABLES: [&str; 8] = ["a", "e", "ı", "i", "o", "ö", "u", "ü"];

/// Run the doctor command
///
/// Checks:
/// - Store directory exists and loads
/// - Skipped clips
/// - Single-vowel syllables
/// - Coverage of the example sentences
/// - Current directory permissions
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run(store_dir: &Path) -> Result<ExitCode> {
    println!("{}", "Hece Doctor".cyan().bold());
    println!("{}", "===========".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!("  {} hece-cli v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("{}", "Store:".bold());
    match StoreLoader::new(store_dir).load() {
        Ok(loaded) => {
            let store = &loaded.store;
            println!(
                "  {} {} syllables loaded from {} ({} Hz, {:.1}s of audio)",
                "ok".green(),
                store.len(),
                store_dir.display(),
                store.sample_rate(),
                store.total_duration_seconds()
            );

            if loaded.failures.is_empty() {
                println!("  {} No clips skipped", "ok".green());
            } else {
                println!("  {} {} clip(s) skipped:", "!!".yellow(), loaded.failures.len());
                for failure in &loaded.failures {
                    println!(
                        "     {} {}",
                        failure.path.display(),
                        failure.reason.to_string().dimmed()
                    );
                }
            }

            let missing_vowels = missing_keys(store, &VOWEL_SYLLABLES);
            if missing_vowels.is_empty() {
                println!("  {} All single-vowel syllables present", "ok".green());
            } else {
                println!(
                    "  {} Missing single-vowel syllables: {}",
                    "!!".yellow(),
                    missing_vowels.join(", ")
                );
            }

            println!();
            println!("{}", "Example coverage:".bold());
            for (i, sentence) in EXAMPLE_SENTENCES.iter().enumerate() {
                let report = check_coverage(sentence, store);
                let marker = if report.is_complete() {
                    "ok".green()
                } else {
                    "!!".yellow()
                };
                println!(
                    "  {} {}. {:>5.1}% {}",
                    marker,
                    i + 1,
                    report.coverage,
                    report.missing.join(" ").dimmed()
                );
            }
        }
        Err(e) => {
            println!("  {} {}", "!!".red(), e);
            println!(
                "     {}",
                "Point --store at a directory of <syllable>.wav files (16-bit mono, 22050 Hz)."
                    .dimmed()
            );
            all_ok = false;
        }
    }

    println!();

    println!("{}", "Permissions:".bold());
    match env::current_dir() {
        Ok(dir) => {
            let test_file = dir.join(".hece_write_test");
            match std::fs::write(&test_file, "test") {
                Ok(_) => {
                    let _ = std::fs::remove_file(&test_file);
                    println!(
                        "  {} Current directory is writable ({})",
                        "ok".green(),
                        dir.display()
                    );
                }
                Err(e) => {
                    println!("  {} Cannot write to current directory: {}", "!!".red(), e);
                    all_ok = false;
                }
            }
        }
        Err(e) => {
            println!("  {} Cannot determine current directory: {}", "!!".red(), e);
            all_ok = false;
        }
    }

    println!();

    if all_ok {
        println!("{} All checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(1))
    }
}

fn missing_keys<'a, S: SyllableSource + ?Sized>(store: &S, keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter().copied().filter(|k| !store.has(k)).collect()
}
