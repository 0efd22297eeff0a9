//! List command implementation
//!
//! Prints every syllable in a store.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use hece_audio::{LoadedStore, StoreLoader, SyllableSource};

use super::json_output::{error_to_json, path_string, print_json, JsonOutput, ListResult};
use super::reporting::print_load_failures;

const KEYS_PER_LINE: usize = 12;

/// Run the list command
pub fn run(store_dir: &Path, json_output: bool) -> Result<ExitCode> {
    let loaded = match StoreLoader::new(store_dir).load() {
        Ok(loaded) => loaded,
        Err(e) if json_output => {
            let err = anyhow::Error::from(e);
            print_json(&JsonOutput::<ListResult>::failure(vec![error_to_json(&err)]))?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    let result = list_result(store_dir, loaded);

    if json_output {
        print_json(&JsonOutput::success(result))?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Store:".cyan().bold(), result.store);
    println!(
        "{} {} ({} Hz, {:.1}s of audio)",
        "Syllables:".bold(),
        result.total,
        result.sample_rate,
        result.total_duration_seconds
    );
    for line in result.syllables.chunks(KEYS_PER_LINE) {
        println!("  {}", line.join(" "));
    }
    print_load_failures(&result.load_failures);

    Ok(ExitCode::SUCCESS)
}

fn list_result(store_dir: &Path, loaded: LoadedStore) -> ListResult {
    let store = &loaded.store;
    ListResult {
        store: path_string(store_dir),
        total: store.len(),
        sample_rate: store.sample_rate(),
        total_duration_seconds: store.total_duration_seconds(),
        syllables: store.all_keys().into_iter().map(str::to_string).collect(),
        load_failures: loaded.failures,
    }
}
