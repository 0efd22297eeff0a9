//! Shared human-readable output helpers.

use colored::Colorize;
use hece_audio::LoadFailure;
use hece_synth::{CoverageReport, WordBreakdown};

/// Prints skipped clips as warnings.
pub(crate) fn print_load_failures(failures: &[LoadFailure]) {
    if failures.is_empty() {
        return;
    }
    println!(
        "{} {} clip(s) skipped while loading",
        "!".yellow(),
        failures.len()
    );
    for failure in failures {
        println!(
            "  {} {}: {}",
            "!".yellow(),
            failure.path.display(),
            failure.reason.to_string().dimmed()
        );
    }
}

/// Prints each word with its syllables, missing ones in red.
pub(crate) fn print_breakdown(words: &[WordBreakdown]) {
    println!("{}", "Syllables:".bold());
    for word in words {
        let syllables = word
            .syllables
            .iter()
            .map(|s| {
                if s.available {
                    s.text.green().to_string()
                } else {
                    s.text.red().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("-");
        println!("  {} {}", format!("{}:", word.word).dimmed(), syllables);
    }
}

/// Prints the coverage summary and any missing syllables.
pub(crate) fn print_coverage(report: &CoverageReport) {
    let percent = format!("{:.1}%", report.coverage);
    let percent = if report.is_complete() {
        percent.green()
    } else {
        percent.yellow()
    };
    println!(
        "{} {} of {} syllables",
        "Coverage:".bold(),
        percent,
        report.total
    );
    if !report.is_complete() {
        println!(
            "  {} missing (silence substituted): {}",
            "!".yellow(),
            report.missing.join(", ").red()
        );
    }
}
