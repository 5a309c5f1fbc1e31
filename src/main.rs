//! Hangman - CLI
//!
//! Console hangman with scoring, persistent statistics, and per-round logs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{DEFAULT_LOG_DIR, Session, SessionConfig, show_statistics},
    core::DEFAULT_MAX_WRONG,
    telemetry::init_tracing,
    wordlists::WordList,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter (or one word) at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (comma-separated, optional trailing period); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Directory for stats.json and per-round logs
    #[arg(short, long, global = true, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Wrong guesses allowed per round
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_WRONG,
        value_parser = parse_max_wrong
    )]
    max_wrong: usize,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds until you quit (default)
    Play,

    /// Show cumulative statistics
    Stats,
}

fn parse_max_wrong(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Load the word list from the -w flag, or the embedded list
fn load_words(path: Option<&Path>) -> Result<WordList> {
    let words = match path {
        Some(path) => WordList::from_file(path),
        None => WordList::embedded(),
    }
    .context("Error loading words")?;

    info!(count = words.len(), "word list loaded");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SessionConfig::new(cli.log_dir).with_max_wrong(cli.max_wrong);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.words.as_deref(), &config),
        Commands::Stats => show_statistics(&config, &mut io::stdout()).map(|_| ()),
    }
}

fn run_play_command(words_path: Option<&Path>, config: &SessionConfig) -> Result<()> {
    let words = load_words(words_path)?;

    let stdin = io::stdin();
    let mut session = Session::new(&words, config, stdin.lock(), io::stdout());
    session.run(&mut rand::rng())?;
    Ok(())
}
