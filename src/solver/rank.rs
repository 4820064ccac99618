//! Guess ranking
//!
//! Scores every vocabulary word against the candidate pool and returns the
//! whole list sorted ascending by entropy. Callers take the *last* entry as
//! the recommended guess; downstream code relies on this ascending
//! convention, so it must not be flipped.

use super::entropy::score;
use crate::error::{Result, SolverError};
use rayon::prelude::*;

/// Vocabulary words scored per batch by one worker
pub const BATCH_SIZE: usize = 100;

/// A guess together with its entropy score in bits
///
/// The score is 0 exactly when the guess leaves the entire pool in a single
/// feedback class, most notably when the pool is already a singleton.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub guess: String,
    pub score: f64,
}

/// Rank every vocabulary word by expected information gain, ascending
///
/// Ties keep vocabulary order (stable sort), so the output is fully
/// deterministic for a given input. Scoring is distributed over fixed-size
/// batches of [`BATCH_SIZE`] words; batch assignment is static, so the
/// result is identical to [`rank_guesses_serial`].
///
/// A singleton pool short-circuits: the lone candidate is returned at score
/// 0 without scoring the rest of the vocabulary. The candidate must then be
/// a valid guess, otherwise the solver has nothing playable to recommend.
///
/// # Errors
/// - [`SolverError::InvalidState`] if the pool is empty, or if a singleton
///   pool's member is missing from the vocabulary.
/// - [`SolverError::LengthMismatch`] if vocabulary and pool word lengths
///   disagree.
///
/// # Examples
/// ```
/// use entroguess::solver::rank_guesses;
///
/// let vocabulary: Vec<String> = (0..100).map(|i| format!("{i:02}")).collect();
/// let pool = vocabulary.clone();
///
/// let ranked = rank_guesses(&vocabulary, &pool).unwrap();
/// assert_eq!(ranked.len(), 100);
///
/// // Best guess last; a doubled digit is never the best opener.
/// let best = ranked.last().unwrap();
/// assert_ne!(best.guess.as_bytes()[0], best.guess.as_bytes()[1]);
/// ```
pub fn rank_guesses(vocabulary: &[String], pool: &[String]) -> Result<Vec<ScoredGuess>> {
    if let Some(shortcut) = singleton_shortcut(vocabulary, pool)? {
        return Ok(shortcut);
    }

    let mut scored = vocabulary
        .par_chunks(BATCH_SIZE)
        .map(|batch| {
            batch
                .iter()
                .map(|guess| {
                    Ok(ScoredGuess {
                        guess: guess.clone(),
                        score: score(guess, pool)?,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    sort_ascending(&mut scored);
    Ok(scored)
}

/// Sequential form of [`rank_guesses`]
///
/// Produces byte-for-byte identical output; exists so the parallel path has
/// something to be checked against and for callers that want to avoid the
/// thread pool for tiny vocabularies.
///
/// # Errors
/// Same conditions as [`rank_guesses`].
pub fn rank_guesses_serial(vocabulary: &[String], pool: &[String]) -> Result<Vec<ScoredGuess>> {
    if let Some(shortcut) = singleton_shortcut(vocabulary, pool)? {
        return Ok(shortcut);
    }

    let mut scored = vocabulary
        .iter()
        .map(|guess| {
            Ok(ScoredGuess {
                guess: guess.clone(),
                score: score(guess, pool)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    sort_ascending(&mut scored);
    Ok(scored)
}

/// Handle the empty and singleton pool cases shared by both ranking paths
fn singleton_shortcut(vocabulary: &[String], pool: &[String]) -> Result<Option<Vec<ScoredGuess>>> {
    match pool {
        [] => Err(SolverError::InvalidState(
            "cannot rank guesses against an empty pool".into(),
        )),
        [only] => {
            if vocabulary.contains(only) {
                Ok(Some(vec![ScoredGuess {
                    guess: only.clone(),
                    score: 0.0,
                }]))
            } else {
                Err(SolverError::InvalidState(format!(
                    "sole candidate {only} is not a valid guess"
                )))
            }
        }
        _ => Ok(None),
    }
}

fn sort_ascending(scored: &mut [ScoredGuess]) {
    // Stable: equal scores keep vocabulary order
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
}
