//! Hece CLI - Turkish concatenative syllable speech synthesis
//!
//! This binary loads a directory of recorded syllables and turns text into
//! speech, or inspects how well a store covers a text.

use std::process::ExitCode;

use clap::Parser;
use hece_cli::cli_args::{Cli, Commands};
use hece_cli::commands;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Synthesize {
            store,
            text,
            output,
            pitch,
            config,
            json,
        } => commands::synthesize::run(&store, &text, &output, pitch, config.as_deref(), json),
        Commands::Coverage { store, text, json } => commands::coverage::run(&store, &text, json),
        Commands::Syllabify { text, json } => commands::syllabify::run(&text, json),
        Commands::List { store, json } => commands::list::run(&store, json),
        Commands::Examples { json } => commands::examples::run(json),
        Commands::Doctor { store } => commands::doctor::run(&store),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
