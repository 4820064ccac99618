//! Game engine
//!
//! Holds the hidden answer and a guess budget, and turns guesses into
//! feedback via the core deriver. The solver never sees this type; it only
//! receives the feedback vectors the game hands out.

use crate::core::{FeedbackVector, derive_feedback};
use crate::error::{Result, SolverError};
use rand::prelude::IndexedRandom;

/// A single game against a hidden answer
///
/// # Examples
/// ```
/// use entroguess::game::Game;
///
/// let mut game = Game::new("42", 10);
/// let feedback = game.step("40").unwrap();
/// assert!(!game.is_finished());
///
/// game.step("42").unwrap();
/// assert!(game.is_won());
/// ```
pub struct Game {
    answer: String,
    guesses_remaining: u32,
    won: bool,
    history: Vec<FeedbackVector>,
}

impl Game {
    /// Start a game with a fixed answer
    #[must_use]
    pub fn new(answer: impl Into<String>, num_guesses: u32) -> Self {
        Self {
            answer: answer.into(),
            guesses_remaining: num_guesses,
            won: false,
            history: Vec::new(),
        }
    }

    /// Start a game with an answer drawn uniformly from `possible_answers`
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidState`] if the answer list is empty.
    pub fn with_random_answer(possible_answers: &[String], num_guesses: u32) -> Result<Self> {
        let answer = possible_answers
            .choose(&mut rand::rng())
            .ok_or_else(|| SolverError::InvalidState("no possible answers to draw from".into()))?;
        Ok(Self::new(answer.clone(), num_guesses))
    }

    /// Play a guess and get its feedback
    ///
    /// A guess of the wrong length is rejected without consuming a turn.
    /// Returns an owned copy of the feedback; the game keeps its own in the
    /// history.
    ///
    /// # Errors
    /// - [`SolverError::LengthMismatch`] if the guess length differs from
    ///   the answer length.
    /// - [`SolverError::InvalidState`] if the game is already over.
    pub fn step(&mut self, guess: &str) -> Result<FeedbackVector> {
        if self.is_finished() {
            return Err(SolverError::InvalidState("the game is already over".into()));
        }

        let derivation = derive_feedback(guess, &self.answer)?;
        self.guesses_remaining -= 1;
        self.won = derivation.is_winner;
        self.history.push(derivation.feedback.clone());

        Ok(derivation.feedback)
    }

    /// True once the game was won or the guess budget ran out
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.won || self.guesses_remaining == 0
    }

    /// True iff some guess matched the answer exactly
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Guesses left in the budget
    #[must_use]
    pub const fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    /// The hidden answer; only meant for display once the game is over
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Feedback for every guess played so far, in order
    #[must_use]
    pub fn history(&self) -> &[FeedbackVector] {
        &self.history
    }
}
