//! Daily Wordle - CLI
//!
//! Terminal Wordle with a TUI and a plain line mode, playing against the
//! word-of-the-day service or an offline dictionary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::{check_guess, run_simple},
    core::Word,
    interactive::run_tui,
    output::print_check_result,
    source::{ConfiguredSource, DEFAULT_API_URL, HttpWordSource, OfflineWordSource},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the word-of-the-day service
    #[arg(long, global = true, env = "WORDLE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Play against the built-in dictionary instead of the word service
    #[arg(long, global = true)]
    offline: bool,

    /// Offline dictionary file, one word per line (implies --offline)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Force the target word (implies --offline)
    #[arg(long, global = true)]
    word: Option<String>,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "daily_wordle.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Score a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word to compare against
        target: String,
    },
}

/// Pick the word source from the flags
///
/// Any offline flag selects the local dictionary; otherwise the word service
/// at `--api-url` is used.
fn build_source(cli: &Cli) -> Result<ConfiguredSource> {
    if !cli.offline && cli.wordlist.is_none() && cli.word.is_none() {
        info!(api_url = %cli.api_url, "Using word service");
        return Ok(ConfiguredSource::Http(HttpWordSource::new(
            cli.api_url.as_str(),
        )));
    }

    let mut source = match &cli.wordlist {
        Some(path) => OfflineWordSource::from_file(path)?,
        None => OfflineWordSource::embedded()?,
    };
    if let Some(word) = &cli.word {
        source = source.with_target(Word::new(word.as_str())?);
    }

    info!(words = source.len(), "Using offline dictionary");
    Ok(ConfiguredSource::Offline(source))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to a file so output does not tear the TUI
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            init_file_logging(&cli.log_file)?;
            run_tui(build_source(&cli)?).await
        }
        Commands::Simple => {
            init_stderr_logging();
            run_simple(build_source(&cli)?).await
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target)?;
            print_check_result(&result.guess, &result.target, &result.feedback);
            Ok(())
        }
    }
}
