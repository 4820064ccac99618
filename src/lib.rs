//! entroguess
//!
//! Plays and solves Wordle-like games over fixed-length symbol sequences
//! (digits or letters) by ranking guesses on expected information gain.
//!
//! # Quick start
//!
//! ```rust
//! use entroguess::core::derive_feedback;
//! use entroguess::solver::SolverState;
//! use entroguess::vocab::digit_vocabulary;
//!
//! let vocabulary = digit_vocabulary(2);
//! let mut solver = SolverState::new(vocabulary.clone(), vocabulary);
//!
//! // Best guess is the last entry of the ascending ranking
//! let ranked = solver.rank().unwrap();
//! let guess = ranked.last().unwrap().guess.clone();
//!
//! // The game reports feedback; here the hidden answer is 42
//! let feedback = derive_feedback(&guess, "42").unwrap().feedback;
//! solver.apply_feedback(&feedback).unwrap();
//! assert!(solver.pool().len() < 100);
//! ```

// Core domain types
pub mod core;

// Error types shared across the crate
pub mod error;

// Solving algorithms
pub mod solver;

// Game engine holding the hidden answer
pub mod game;

// Vocabulary generation and loading
pub mod vocab;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
