//! Terminal output formatting
//!
//! Colored feedback rendering and ranked-guess listings for the CLI
//! commands. Green for exact, yellow for present-elsewhere, white for
//! absent, matching the usual Wordle palette.

use crate::core::{FeedbackVector, Outcome};
use crate::solver::ScoredGuess;
use colored::Colorize;

/// Render a feedback vector as colored symbols
#[must_use]
pub fn paint_feedback(feedback: &FeedbackVector) -> String {
    feedback
        .iter()
        .map(|entry| {
            let symbol = (entry.symbol as char).to_string();
            match entry.outcome {
                Outcome::Exact => symbol.black().on_green().to_string(),
                Outcome::PresentElsewhere => symbol.black().on_yellow().to_string(),
                Outcome::Absent => symbol.black().on_white().to_string(),
            }
        })
        .collect()
}

/// Print the tail of an ascending ranking, best guess last
pub fn print_top_guesses(ranked: &[ScoredGuess], limit: usize) {
    println!("Top guesses:");
    let start = ranked.len().saturating_sub(limit);
    for scored in &ranked[start..] {
        println!("  {:>8.4} bits  {}", scored.score, scored.guess);
    }
}

/// Print the remaining candidates when few enough to be worth reading
pub fn print_pool_if_small(pool: &[String], max: usize) {
    if pool.len() <= max {
        println!("Possible answers: {}", pool.join(", "));
    } else {
        println!("Possible answers: {}", pool.len());
    }
}
