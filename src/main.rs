//! Wordle - CLI
//!
//! Guess the hidden five-letter word in six tries, in a TUI or line mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wordle_game::{
    commands::{run_simple, score_words},
    config::{Config, SourceKind, init_logging},
    core::Word,
    output::print_score_result,
    wordlists::DEFAULT_API_URL,
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

    /// Word source: 'api' (default), 'embedded' (any case), or path to a word file
    #[arg(short, long, global = true, default_value = "api")]
    source: String,

    /// Word API URL (must return a JSON array of words)
    #[arg(long, global = true, env = "WORDLE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Word API timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout: u64,

    /// Play with this solution instead of fetching one
    #[arg(long, global = true)]
    solution: Option<Word>,

    /// Seed for picking the solution
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show the solution while playing
    #[arg(long, global = true)]
    reveal: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score one guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The solution to score against
        solution: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            source: SourceKind::from_flag(&self.source),
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            solution: self.solution.clone(),
            seed: self.seed,
            reveal: self.reveal,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, solution } => run_score_command(&guess, &solution),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config.word_source(), config.rng(), config.reveal);
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let source = config.word_source();
    let mut rng = config.rng();
    run_simple(source.as_ref(), &mut rng, config.reveal)
}

fn run_score_command(guess: &str, solution: &str) -> Result<()> {
    let result = score_words(guess, solution)?;
    print_score_result(&result.guess, &result.solution, &result.feedback);
    Ok(())
}
