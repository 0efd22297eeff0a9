//! CLI argument definitions for the hece command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hece_synth::{example, DEFAULT_TEXT, EXAMPLE_SENTENCES};

/// Directory searched for syllable clips when `--store` is not given.
pub const DEFAULT_STORE_DIR: &str = "ses dosyaları";

/// Output file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "cikti.wav";

/// Hece - Turkish concatenative syllable speech synthesis
#[derive(Parser)]
#[command(name = "hece")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize text into a WAV file
    Synthesize {
        /// Directory of <syllable>.wav clips
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,

        #[command(flatten)]
        text: TextSource,

        /// Output WAV path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Pitch shift in semitones (overrides the config file)
        #[arg(short, long, allow_hyphen_values = true)]
        pitch: Option<f64>,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Report which syllables of a text the store is missing
    Coverage {
        /// Directory of <syllable>.wav clips
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,

        #[command(flatten)]
        text: TextSource,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Split words into syllables (no store needed)
    Syllabify {
        /// Text to split
        #[arg(required = true)]
        text: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List every syllable in the store
    List {
        /// Directory of <syllable>.wav clips
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in example sentences
    Examples {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check that a store directory is usable
    Doctor {
        /// Directory of <syllable>.wav clips
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,
    },
}

/// Where the text to process comes from. At most one may be given.
#[derive(Args, Debug, Default, Clone)]
#[group(multiple = false)]
pub struct TextSource {
    /// Text to synthesize
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read the text from a UTF-8 file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Use built-in example sentence N (1-based, see `hece examples`)
    #[arg(short, long)]
    pub example: Option<usize>,
}

impl TextSource {
    /// Resolves the text, falling back to the default sentence.
    pub fn resolve(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()));
        }
        if let Some(n) = self.example {
            return example(n).map(str::to_string).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown example {} (expected 1..={})",
                    n,
                    EXAMPLE_SENTENCES.len()
                )
            });
        }
        Ok(DEFAULT_TEXT.to_string())
    }
}
