//! entroguess - CLI
//!
//! Wordle-like game and entropy-maximizing solver for fixed-length symbol
//! sequences. Defaults to a generated two-digit vocabulary; pass a word
//! list file to play with letters instead.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use entroguess::{
    commands::{print_selfplay_stats, run_assist, run_play, run_selfplay, run_tree},
    vocab::{digit_vocabulary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "entroguess",
    about = "Wordle-style game and information-theoretic solver for digit or letter sequences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Width of the generated digit vocabulary
    #[arg(short, long, global = true, default_value = "2")]
    digits: u32,

    /// Load the vocabulary from a file (one word per line) instead
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Guess budget per game
    #[arg(short, long, global = true, default_value = "10")]
    guesses: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against a hidden answer (default)
    Play {
        /// Fix the answer instead of drawing one at random
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Recommend guesses for a game played elsewhere
    Assist,

    /// Let the solver play every answer and report statistics
    Selfplay {
        /// Only play the first N answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Force the opening guess
        #[arg(short, long)]
        first_guess: Option<String>,
    },

    /// Build the decision tree and print it
    Tree {
        /// Levels of the tree to print
        #[arg(long, default_value = "3")]
        depth: usize,
    },
}

fn load_vocabulary(cli: &Cli) -> Result<Vec<String>> {
    match &cli.wordlist {
        Some(path) => load_from_file(path).with_context(|| format!("failed to load {path}")),
        None => Ok(digit_vocabulary(cli.digits)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let vocabulary = load_vocabulary(&cli)?;

    match cli.command.unwrap_or(Commands::Play { answer: None }) {
        Commands::Play { answer } => run_play(&vocabulary, answer, cli.guesses),
        Commands::Assist => run_assist(&vocabulary, &vocabulary),
        Commands::Selfplay { limit, first_guess } => {
            let stats = run_selfplay(
                &vocabulary,
                &vocabulary,
                cli.guesses,
                limit,
                first_guess.as_deref(),
            )?;
            print_selfplay_stats(&stats);
            Ok(())
        }
        Commands::Tree { depth } => run_tree(&vocabulary, &vocabulary, depth),
    }
}
