//! Wordle - CLI
//!
//! Terminal Wordle with a TUI, a line-based mode and a one-shot scorer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_simple, score_guess},
    config::Config,
    game::{GameSession, Statistics, rng_from_seed},
    output::print_score_result,
    wordlists::{Dictionary, loader::load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers', or path to a file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Number of guesses per game
    #[arg(short = 'm', long, global = true)]
    max_attempts: Option<usize>,

    /// Seed for target selection, for reproducible games
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured filter. The TUI owns the terminal, so
/// without a log file its logs are discarded.
fn init_logging(filter: &str, log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.with_writer(Mutex::new(file)).with_ansi(false).init();
    } else if tui {
        builder.with_writer(io::sink).init();
    } else {
        builder.with_writer(io::stderr).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?.with_overrides(
        cli.max_attempts,
        cli.wordlist,
        cli.seed,
    )?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(
        &config.log_filter,
        cli.log_file.as_ref(),
        matches!(command, Commands::Play),
    )?;

    let dictionary = load_dictionary(&config.wordlist)?;
    info!(
        answers = dictionary.answers().len(),
        allowed = dictionary.allowed_count(),
        max_attempts = config.max_attempts,
        "Dictionary ready"
    );

    match command {
        Commands::Play => run_play_command(&dictionary, &config),
        Commands::Simple => run_simple_command(&dictionary, &config),
        Commands::Score { guess, target } => run_score_command(&guess, &target, &dictionary),
    }
}

fn run_play_command(dictionary: &Dictionary, config: &Config) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let session = GameSession::new(dictionary, config.max_attempts, rng_from_seed(config.seed));
    run_tui(App::new(session))
}

fn run_simple_command(dictionary: &Dictionary, config: &Config) -> Result<()> {
    let mut session =
        GameSession::new(dictionary, config.max_attempts, rng_from_seed(config.seed));
    let mut stats = Statistics::new(config.max_attempts);

    let stdin = io::stdin();
    run_simple(&mut session, &mut stats, stdin.lock(), &mut io::stdout())
}

fn run_score_command(guess: &str, target: &str, dictionary: &Dictionary) -> Result<()> {
    let result = score_guess(guess, target, dictionary)?;
    print_score_result(&result);
    Ok(())
}
