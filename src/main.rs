//! Wordle - console game
//!
//! Guess a 5-letter Russian word in 6 attempts, with constraint-based hints.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_ru::{
    commands::run_play,
    wordlists::{Dictionary, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_ru",
    about = "Console Wordle over the Russian alphabet with constraint-based hints",
    version
)]
struct Cli {
    /// Path to a dictionary file, one word per line (built-in list if omitted)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let words = match &cli.dictionary {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read dictionary file {}", path.display()))?,
        None => loader::builtin_words(),
    };

    let dictionary = Dictionary::new(words);
    ensure!(
        !dictionary.is_empty(),
        "the dictionary contains no playable 5-letter words"
    );
    info!(words = dictionary.len(), "dictionary loaded");

    run_play(&Arc::new(dictionary), cli.seed)
}
