//! Feedback derivation
//!
//! Computes the per-position feedback a guess receives against a known
//! answer, with the canonical Wordle treatment of repeated symbols: exact
//! matches claim their occurrence first, and the remaining occurrences are
//! handed out to present-elsewhere positions left to right.

use super::outcome::{CharOutcome, FeedbackVector, Outcome};
use crate::error::{Result, SolverError};

/// Result of comparing a guess against a known answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// True iff every position matched exactly (the guess wins the game)
    pub is_winner: bool,
    /// Per-position feedback for the guess
    pub feedback: FeedbackVector,
}

/// Derive the feedback a guess receives against a known answer
///
/// # Algorithm
/// 1. First pass: positions where guess and answer agree are `Exact`;
///    every other answer symbol goes into an unaccounted-count table.
/// 2. Second pass, left to right over the remaining positions: a guess
///    symbol with unaccounted occurrences left is `PresentElsewhere` and
///    consumes one; otherwise it is `Absent`.
///
/// The pass order matters for repeated symbols: an exact match elsewhere in
/// the guess consumes an occurrence before any present-elsewhere position
/// can claim it.
///
/// # Errors
/// Returns [`SolverError::LengthMismatch`] if guess and answer have
/// different lengths.
///
/// # Examples
/// ```
/// use entroguess::core::{derive_feedback, Outcome};
///
/// // Both 2s in the answer are claimed by the exact matches, so the
/// // leading 2 of the guess finds no occurrence left.
/// let d = derive_feedback("222", "122").unwrap();
/// assert_eq!(
///     d.feedback.outcomes(),
///     vec![Outcome::Absent, Outcome::Exact, Outcome::Exact]
/// );
///
/// let win = derive_feedback("42", "42").unwrap();
/// assert!(win.is_winner);
/// ```
pub fn derive_feedback(guess: &str, answer: &str) -> Result<Derivation> {
    let guess_bytes = guess.as_bytes();
    let answer_bytes = answer.as_bytes();

    if guess_bytes.len() != answer_bytes.len() {
        return Err(SolverError::LengthMismatch {
            expected: answer_bytes.len(),
            actual: guess_bytes.len(),
        });
    }

    // Answer occurrences not claimed by an exact match, indexed by byte
    let mut unaccounted = [0usize; 256];
    let mut outcomes = vec![Outcome::Absent; guess_bytes.len()];

    for (i, (&g, &a)) in guess_bytes.iter().zip(answer_bytes).enumerate() {
        if g == a {
            outcomes[i] = Outcome::Exact;
        } else {
            unaccounted[a as usize] += 1;
        }
    }

    for (i, &g) in guess_bytes.iter().enumerate() {
        if outcomes[i] != Outcome::Exact && unaccounted[g as usize] > 0 {
            outcomes[i] = Outcome::PresentElsewhere;
            unaccounted[g as usize] -= 1;
        }
    }

    let is_winner = outcomes.iter().all(|&o| o == Outcome::Exact);
    let entries = guess_bytes
        .iter()
        .zip(&outcomes)
        .map(|(&symbol, &outcome)| CharOutcome { symbol, outcome })
        .collect();

    Ok(Derivation {
        is_winner,
        feedback: FeedbackVector::new(entries),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes_of(guess: &str, answer: &str) -> Vec<Outcome> {
        derive_feedback(guess, answer).unwrap().feedback.outcomes()
    }

    #[test]
    fn exact_match_wins() {
        let d = derive_feedback("1234", "1234").unwrap();
        assert!(d.is_winner);
        assert!(d.feedback.is_winner());
        assert_eq!(d.feedback.outcomes(), vec![Outcome::Exact; 4]);
    }

    #[test]
    fn disjoint_symbols_are_all_absent() {
        let d = derive_feedback("12", "34").unwrap();
        assert!(!d.is_winner);
        assert_eq!(d.feedback.outcomes(), vec![Outcome::Absent; 2]);
    }

    #[test]
    fn exact_matches_claim_occurrences_first() {
        // Both 2s of the answer are claimed by the exact matches, so the
        // leading 2 of the guess is absent rather than present-elsewhere.
        assert_eq!(
            outcomes_of("222", "122"),
            vec![Outcome::Absent, Outcome::Exact, Outcome::Exact]
        );
    }

    #[test]
    fn mixed_feedback_example() {
        assert_eq!(
            outcomes_of("123", "324"),
            vec![Outcome::Absent, Outcome::Exact, Outcome::PresentElsewhere]
        );
    }

    #[test]
    fn repeated_guess_symbol_limited_by_answer_count() {
        // Answer has a single 7; only the first unmatched 7 of the guess can
        // be present-elsewhere, the second is absent.
        assert_eq!(
            outcomes_of("177", "701"),
            vec![
                Outcome::PresentElsewhere,
                Outcome::PresentElsewhere,
                Outcome::Absent
            ]
        );
        assert_eq!(
            outcomes_of("77", "70"),
            vec![Outcome::Exact, Outcome::Absent]
        );
    }

    #[test]
    fn elsewhere_matches_resolve_left_to_right() {
        // One unaccounted 5 in the answer, two unmatched 5s in the guess:
        // the leftmost one takes it.
        assert_eq!(
            outcomes_of("550", "055"),
            vec![
                Outcome::PresentElsewhere,
                Outcome::Exact,
                Outcome::PresentElsewhere
            ]
        );
        assert_eq!(
            outcomes_of("505", "055"),
            vec![
                Outcome::PresentElsewhere,
                Outcome::PresentElsewhere,
                Outcome::Exact
            ]
        );
    }

    #[test]
    fn works_on_letter_words() {
        // speed vs erase: s yellow, p gray, both e's yellow, d gray
        assert_eq!(
            outcomes_of("speed", "erase"),
            vec![
                Outcome::PresentElsewhere,
                Outcome::Absent,
                Outcome::PresentElsewhere,
                Outcome::PresentElsewhere,
                Outcome::Absent
            ]
        );
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            derive_feedback("123", "12"),
            Err(SolverError::LengthMismatch {
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn feedback_carries_the_guess() {
        let d = derive_feedback("42", "13").unwrap();
        assert_eq!(d.feedback.guess_text(), "42");
    }
}
