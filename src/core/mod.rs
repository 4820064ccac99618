//! Core domain types for feedback-based guessing games
//!
//! This module contains the fundamental domain types with zero external
//! dependencies: the three-valued outcome model, feedback vectors, and the
//! derivation of feedback from a guess and a known answer. Everything here
//! is pure and has clear mathematical properties.

mod feedback;
mod outcome;

pub use feedback::{Derivation, derive_feedback};
pub use outcome::{CharOutcome, FeedbackVector, Outcome, OutcomeVectors, enumerate_outcomes};
