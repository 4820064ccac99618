//! Self-play benchmark
//!
//! Lets the solver play a full game against every possible answer and
//! reports how many guesses it needed.

use crate::game::Game;
use crate::solver::SolverState;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregated results of a self-play run
pub struct SelfPlayStats {
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub max_guesses: usize,
    /// Guesses taken → number of games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

impl SelfPlayStats {
    /// Mean guesses over solved and unsolved games alike
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_guesses as f64 / self.total_games as f64
    }
}

/// Play every answer (or the first `limit`) and collect statistics
///
/// `first_guess` forces the opening guess, which skips the most expensive
/// ranking round and mirrors how a precomputed opener is used in practice.
pub fn run_selfplay(
    valid_guesses: &[String],
    possible_answers: &[String],
    num_guesses: u32,
    limit: Option<usize>,
    first_guess: Option<&str>,
) -> Result<SelfPlayStats> {
    let targets = match limit {
        Some(n) => &possible_answers[..n.min(possible_answers.len())],
        None => possible_answers,
    };

    let start = Instant::now();
    let bar = ProgressBar::new(targets.len() as u64);

    let mut stats = SelfPlayStats {
        total_games: targets.len(),
        solved: 0,
        total_guesses: 0,
        max_guesses: 0,
        distribution: HashMap::new(),
        duration: Duration::ZERO,
    };

    for answer in targets {
        let (won, guesses) = play_one(valid_guesses, possible_answers, answer, num_guesses, first_guess)
            .with_context(|| format!("self-play failed for answer {answer}"))?;

        if won {
            stats.solved += 1;
        }
        stats.total_guesses += guesses;
        stats.max_guesses = stats.max_guesses.max(guesses);
        *stats.distribution.entry(guesses).or_insert(0) += 1;
        bar.inc(1);
    }

    bar.finish_and_clear();
    stats.duration = start.elapsed();
    Ok(stats)
}

/// Play a single game to completion, returning (won, guesses used)
fn play_one(
    valid_guesses: &[String],
    possible_answers: &[String],
    answer: &str,
    num_guesses: u32,
    first_guess: Option<&str>,
) -> Result<(bool, usize)> {
    let mut solver = SolverState::new(valid_guesses.to_vec(), possible_answers.to_vec());
    let mut game = Game::new(answer, num_guesses);
    let mut guesses = 0usize;

    while !game.is_finished() {
        guesses += 1;

        let guess = match (guesses, first_guess) {
            (1, Some(forced)) => forced.to_string(),
            _ => {
                let ranked = solver.rank()?;
                ranked
                    .last()
                    .map(|scored| scored.guess.clone())
                    .context("ranking returned no guesses")?
            }
        };

        let feedback = game.step(&guess)?;
        if game.is_won() {
            break;
        }
        solver.apply_feedback(&feedback)?;
    }

    Ok((game.is_won(), guesses))
}

/// Print a self-play summary to stdout
pub fn print_selfplay_stats(stats: &SelfPlayStats) {
    println!("Games:          {}", stats.total_games);
    println!(
        "Solved:         {} ({:.1}%)",
        stats.solved,
        100.0 * stats.solved as f64 / stats.total_games.max(1) as f64
    );
    println!("Avg guesses:    {:.3}", stats.average_guesses());
    println!("Worst game:     {} guesses", stats.max_guesses);
    println!("Elapsed:        {:.1?}", stats.duration);

    let mut counts: Vec<(usize, usize)> = stats
        .distribution
        .iter()
        .map(|(&guesses, &games)| (guesses, games))
        .collect();
    counts.sort_unstable();

    for (guesses, games) in counts {
        println!("  {guesses} guesses: {games}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::digit_vocabulary;

    #[test]
    fn solves_the_whole_single_digit_universe() {
        let vocab = digit_vocabulary(1);
        let stats = run_selfplay(&vocab, &vocab, 10, None, None).unwrap();

        assert_eq!(stats.total_games, 10);
        assert_eq!(stats.solved, 10);
        assert!(stats.average_guesses() >= 1.0);
    }

    #[test]
    fn distribution_accounts_for_every_game() {
        let vocab = digit_vocabulary(2);
        let stats = run_selfplay(&vocab, &vocab, 10, Some(20), None).unwrap();

        assert_eq!(stats.total_games, 20);
        assert_eq!(stats.distribution.values().sum::<usize>(), 20);
    }

    #[test]
    fn forced_first_guess_is_honored() {
        let vocab = digit_vocabulary(2);
        // Forcing the opener still solves everything within budget
        let stats = run_selfplay(&vocab, &vocab, 10, Some(10), Some("01")).unwrap();

        assert_eq!(stats.solved, 10);
    }

    #[test]
    fn limit_caps_the_number_of_games() {
        let vocab = digit_vocabulary(2);
        let stats = run_selfplay(&vocab, &vocab, 10, Some(5), None).unwrap();
        assert_eq!(stats.total_games, 5);

        // Limit larger than the answer list is clamped
        let vocab1 = digit_vocabulary(1);
        let stats = run_selfplay(&vocab1, &vocab1, 10, Some(500), None).unwrap();
        assert_eq!(stats.total_games, 10);
    }
}
