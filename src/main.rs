//! Wordle Rules - CLI
//!
//! Evaluate guesses, check words and pick answers from a word list.

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use wordle_rules::{
    commands::{check_word, evaluate_guess, pick_answers, summarize},
    output::{print_check, print_evaluation, print_picks, print_summary},
    wordlists::{DEFAULT_LENGTH, default_word_set},
    wordset::WordSet,
};

#[derive(Parser)]
#[command(
    name = "wordle_rules",
    about = "Wordle rules engine: score guesses and manage word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Wordlist: 'default' (bundled 5-letter list) or path to a file, one word per line.
    /// A file that cannot be read is an error here, not an empty list
    #[arg(short = 'w', long, global = true, default_value = "default")]
    words: String,

    /// Seed for reproducible random picks
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against an answer
    Evaluate {
        /// The guessed word
        guess: String,

        /// The hidden answer
        answer: String,
    },

    /// Check whether a word is valid and in the word list
    Check {
        /// Word to check
        word: String,
    },

    /// Pick random answers from the word list
    Pick {
        /// Number of answers to pick
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Summarize the word list (default)
    Stats,
}

/// Install the tracing subscriber; `RUST_LOG` overrides the default `warn` level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word set selected by the -w flag
fn load_word_set(source: &str, length: usize) -> Result<WordSet> {
    if source == "default" {
        ensure!(
            length == DEFAULT_LENGTH,
            "the bundled list only has {DEFAULT_LENGTH}-letter words; pass --words <PATH> for length {length}"
        );
        return Ok(default_word_set());
    }

    let mut words = WordSet::new(length);
    words.try_load_file(source)?;
    Ok(words)
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let words = load_word_set(&cli.words, cli.length)?;

    match cli.command.unwrap_or(Commands::Stats) {
        Commands::Evaluate { guess, answer } => {
            let outcome = evaluate_guess(&words, &guess, &answer)?;
            print_evaluation(&outcome);
        }
        Commands::Check { word } => print_check(&check_word(&words, &word)),
        Commands::Pick { count } => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            print_picks(&pick_answers(&words, count, &mut rng)?);
        }
        Commands::Stats => print_summary(&summarize(&words)),
    }

    Ok(())
}
