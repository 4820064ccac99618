//! Mutable solving session
//!
//! Wraps a candidate pool and the immutable guess vocabulary, exposing the
//! two moves of the interactive decision loop: rank the vocabulary against
//! the current pool, and narrow the pool by observed feedback.

use super::filter::filter_pool;
use super::rank::{ScoredGuess, rank_guesses};
use crate::core::FeedbackVector;
use crate::error::{Result, SolverError};

/// Solver session over a shrinking candidate pool
///
/// The vocabulary is fixed at construction; the pool only ever shrinks as
/// feedback is applied. Cloning takes a deep copy of the pool, which is how
/// hypothetical branches are explored (cost is O(pool size)); two sessions
/// never share a pool.
///
/// # Examples
/// ```
/// use entroguess::core::derive_feedback;
/// use entroguess::solver::SolverState;
///
/// let vocabulary: Vec<String> = (0..100).map(|i| format!("{i:02}")).collect();
/// let mut solver = SolverState::new(vocabulary.clone(), vocabulary);
///
/// let ranked = solver.rank().unwrap();
/// let guess = &ranked.last().unwrap().guess;
///
/// // The game (holding the hidden answer 42) reports feedback:
/// let feedback = derive_feedback(guess, "42").unwrap().feedback;
/// solver.apply_feedback(&feedback).unwrap();
///
/// assert!(solver.pool().contains(&"42".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct SolverState {
    vocabulary: Vec<String>,
    pool: Vec<String>,
}

impl SolverState {
    /// Create a session from a guess vocabulary and an initial answer pool
    #[must_use]
    pub const fn new(vocabulary: Vec<String>, pool: Vec<String>) -> Self {
        Self { vocabulary, pool }
    }

    /// Rank the vocabulary against the current pool, ascending by score
    ///
    /// The last entry is the recommended next guess.
    ///
    /// # Errors
    /// Propagates ranking failures, see [`rank_guesses`].
    pub fn rank(&self) -> Result<Vec<ScoredGuess>> {
        rank_guesses(&self.vocabulary, &self.pool)
    }

    /// Narrow the pool to the candidates consistent with observed feedback
    ///
    /// The pool never grows; on error it is left untouched.
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyPool`] if no candidate is consistent with
    /// the feedback, which means the feedback contradicts an earlier one or
    /// was derived against a vocabulary this session does not know.
    pub fn apply_feedback(&mut self, feedback: &FeedbackVector) -> Result<()> {
        let narrowed = filter_pool(feedback, &self.pool);
        if narrowed.is_empty() {
            return Err(SolverError::EmptyPool);
        }
        self.pool = narrowed;
        Ok(())
    }

    /// Remaining candidate answers
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// The guess vocabulary this session was built with
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// True once a single candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pool.len() == 1
    }
}
