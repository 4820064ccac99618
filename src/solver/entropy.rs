//! Shannon entropy scoring
//!
//! Given a guess and a candidate pool, computes the expected information
//! gain of playing the guess: the base-2 entropy of the distribution of
//! candidates over the feedback classes the guess can produce.

use super::filter::filter_pool;
use crate::core::{FeedbackVector, Outcome, derive_feedback, enumerate_outcomes};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;

/// Score a guess against a candidate pool
///
/// Derives each candidate's feedback class in a single pass, builds a
/// histogram over the observed classes, and returns its Shannon entropy.
/// A candidate falls into exactly one class, so this is identical to
/// enumerating all 3^L classes and counting the non-empty ones (see
/// [`score_by_enumeration`], the slow reference form).
///
/// # Formula
/// H = -Σ p·log₂(p) over classes with p > 0, where p = count / |pool|.
///
/// # Errors
/// Returns [`SolverError::InvalidState`] for an empty pool and
/// [`SolverError::LengthMismatch`] if a candidate's length differs from the
/// guess.
///
/// # Examples
/// ```
/// use entroguess::solver::score;
///
/// let pool: Vec<String> = vec!["12".into(), "34".into()];
///
/// // "12" splits the pool into two singleton classes: one full bit.
/// let bits = score("12", &pool).unwrap();
/// assert!((bits - 1.0).abs() < 1e-9);
/// ```
pub fn score(guess: &str, pool: &[String]) -> Result<f64> {
    if pool.is_empty() {
        return Err(SolverError::InvalidState(
            "cannot score a guess against an empty pool".into(),
        ));
    }

    let mut class_counts: FxHashMap<Vec<Outcome>, usize> = FxHashMap::default();
    for candidate in pool {
        let derivation = derive_feedback(guess, candidate)?;
        *class_counts
            .entry(derivation.feedback.outcomes())
            .or_insert(0) += 1;
    }

    Ok(entropy_of_counts(class_counts.values().copied(), pool.len()))
}

/// Score a guess by enumerating every feedback class
///
/// Walks all 3^L outcome vectors, counts the candidates consistent with
/// each, and computes the entropy of the resulting distribution. This is
/// the reference semantics for [`score`]; it is O(3^L · |pool| · L) and only
/// worth using to cross-check the histogram path.
///
/// # Errors
/// Returns [`SolverError::InvalidState`] for an empty pool.
pub fn score_by_enumeration(guess: &str, pool: &[String]) -> Result<f64> {
    if pool.is_empty() {
        return Err(SolverError::InvalidState(
            "cannot score a guess against an empty pool".into(),
        ));
    }

    let mut counts = Vec::new();
    for outcomes in enumerate_outcomes(guess.len()) {
        let feedback = FeedbackVector::from_parts(guess, &outcomes)?;
        counts.push(filter_pool(&feedback, pool).len());
    }

    Ok(entropy_of_counts(counts.into_iter(), pool.len()))
}

/// Entropy of a class-size distribution; empty classes contribute nothing
fn entropy_of_counts(counts: impl Iterator<Item = usize>, total: usize) -> f64 {
    let total = total as f64;
    counts
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
