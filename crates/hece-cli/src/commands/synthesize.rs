//! Synthesize command implementation
//!
//! Loads a store, synthesizes text and writes a 16-bit mono WAV file.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use hece_audio::wav::write_wav_file;
use hece_audio::{StoreLoader, WavFormat};
use hece_synth::{SynthConfig, Synthesizer};

use super::json_output::{
    error_to_json, input_error_to_json, path_string, print_json, JsonOutput, SynthesizeResult,
};
use super::reporting::{print_breakdown, print_coverage, print_load_failures};
use crate::cli_args::TextSource;

/// Run the synthesize command
///
/// # Arguments
/// * `store_dir` - Directory of syllable clips
/// * `source` - Where the text comes from
/// * `output` - WAV file to write
/// * `pitch` - Pitch shift override in semitones
/// * `config_path` - Optional JSON config file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on failure
pub fn run(
    store_dir: &Path,
    source: &TextSource,
    output: &Path,
    pitch: Option<f64>,
    config_path: Option<&Path>,
    json_output: bool,
) -> Result<ExitCode> {
    let text = match source.resolve() {
        Ok(text) => text,
        Err(e) if json_output => {
            print_json(&JsonOutput::<SynthesizeResult>::failure(vec![
                input_error_to_json(&e),
            ]))?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    if json_output {
        match synthesize_to_file(store_dir, &text, output, pitch, config_path) {
            Ok(result) => {
                print_json(&JsonOutput::success(result))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                print_json(&JsonOutput::<SynthesizeResult>::failure(vec![error_to_json(
                    &e,
                )]))?;
                Ok(ExitCode::from(1))
            }
        }
    } else {
        run_human(store_dir, &text, output, pitch, config_path)
    }
}

fn run_human(
    store_dir: &Path,
    text: &str,
    output: &Path,
    pitch: Option<f64>,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Synthesizing:".cyan().bold(), text);
    println!("{} {}", "Store:".dimmed(), store_dir.display());

    let result = synthesize_to_file(store_dir, text, output, pitch, config_path)?;

    print_load_failures(&result.load_failures);
    println!();
    print_breakdown(&result.words);
    print_coverage(&result.coverage);
    println!();

    println!(
        "{} {:.2}s ({} samples, {} segments, pitch {:+})",
        "Duration:".bold(),
        result.duration_seconds,
        result.num_samples,
        result.segment_count,
        result.pitch_shift
    );
    println!("{} {}", "Format:".dimmed(), WavFormat::mono(result.sample_rate));
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
    println!(
        "{} {} in {}ms",
        "Wrote".green().bold(),
        result.output,
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

/// Loads config and store, synthesizes `text` and writes `output`.
pub(crate) fn synthesize_to_file(
    store_dir: &Path,
    text: &str,
    output: &Path,
    pitch: Option<f64>,
    config_path: Option<&Path>,
) -> Result<SynthesizeResult> {
    let mut config = match config_path {
        Some(path) => SynthConfig::from_file(path)?,
        None => SynthConfig::default(),
    };
    if let Some(semitones) = pitch {
        config = config.with_pitch_shift(semitones);
    }

    let loaded = StoreLoader::new(store_dir)
        .with_sample_rate(config.sample_rate)
        .load()?;
    let synth = Synthesizer::new(&loaded.store, config)?;
    let synthesis = synth.synthesize(text)?;
    let wav = write_wav_file(output, &synthesis.waveform)?;

    Ok(SynthesizeResult {
        output: path_string(output),
        text: text.to_string(),
        pitch_shift: synth.config().pitch_shift,
        duration_seconds: synthesis.duration_seconds(),
        num_samples: wav.num_samples,
        sample_rate: wav.sample_rate(),
        pcm_hash: wav.pcm_hash,
        segment_count: synthesis.segment_count,
        coverage: synthesis.coverage,
        words: synthesis.words,
        load_failures: loaded.failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hece_synth::SynthError;
    use pretty_assertions::assert_eq;

    fn write_clip(dir: &Path, name: &str, len: usize) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(dir.join(name), spec).unwrap();
        for i in 0..len {
            writer.write_sample(((i % 40) as i16 - 20) * 500).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_synthesize_writes_wav() {
        let store = tempfile::tempdir().unwrap();
        write_clip(store.path(), "ki.wav", 3000);
        write_clip(store.path(), "tap.wav", 3000);
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("cikti.wav");

        let result = synthesize_to_file(store.path(), "kitap.", &output, None, None).unwrap();

        assert!(output.exists());
        assert_eq!(result.sample_rate, 22050);
        assert_eq!(result.coverage.coverage, 100.0);
        assert_eq!(result.segment_count, 4);
        assert_eq!(result.pcm_hash.len(), 64);
        assert!(result.load_failures.is_empty());
    }

    #[test]
    fn test_pitch_flag_overrides_config() {
        let store = tempfile::tempdir().unwrap();
        write_clip(store.path(), "ba.wav", 3000);
        let config = store.path().join("hece.json");
        std::fs::write(&config, r#"{"pitch_shift": 5.0}"#).unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("out.wav");

        let result =
            synthesize_to_file(store.path(), "ba", &output, Some(-2.0), Some(&config)).unwrap();
        assert_eq!(result.pitch_shift, -2.0);

        let result = synthesize_to_file(store.path(), "ba", &output, None, Some(&config)).unwrap();
        assert_eq!(result.pitch_shift, 5.0);
    }

    #[test]
    fn test_empty_text_fails_with_synth_error() {
        let store = tempfile::tempdir().unwrap();
        write_clip(store.path(), "ba.wav", 3000);
        let output = store.path().join("out.wav");

        let err = synthesize_to_file(store.path(), "   ", &output, None, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SynthError>(),
            Some(SynthError::NothingToSynthesize)
        ));
        assert!(!output.exists());
    }
}
