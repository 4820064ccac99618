//! Candidate filtering
//!
//! Decides, without knowing the true answer, whether a candidate could have
//! produced a given feedback vector against the guess embedded in it. This
//! is the inverse relation of [`derive_feedback`]: a candidate is consistent
//! with a feedback vector exactly when deriving feedback for (guess,
//! candidate) reproduces that vector. The implementation below replays the
//! deriver's occurrence accounting directly instead of building a full
//! feedback vector per candidate; the test module proves the equivalence
//! exhaustively over a small alphabet.

use crate::core::{FeedbackVector, Outcome};

/// Check whether `candidate` could have produced `feedback`
///
/// A candidate of a different length can never have produced the feedback,
/// so it is simply inconsistent rather than an error.
///
/// # Examples
/// ```
/// use entroguess::core::derive_feedback;
/// use entroguess::solver::is_consistent;
///
/// let feedback = derive_feedback("112", "011").unwrap().feedback;
/// assert!(is_consistent(&feedback, "011"));
/// assert!(!is_consistent(&feedback, "112"));
/// ```
#[must_use]
pub fn is_consistent(feedback: &FeedbackVector, candidate: &str) -> bool {
    let candidate = candidate.as_bytes();
    if candidate.len() != feedback.len() {
        return false;
    }

    // Candidate occurrences not claimed by an exact match, indexed by byte
    let mut unaccounted = [0usize; 256];
    for &b in candidate {
        unaccounted[b as usize] += 1;
    }

    // Exact positions must match the candidate and claim their occurrence.
    // A non-exact outcome where the candidate equals the guess symbol is
    // impossible: the deriver would have marked it exact.
    for (entry, &c) in feedback.iter().zip(candidate) {
        if entry.outcome == Outcome::Exact {
            if c != entry.symbol {
                return false;
            }
            unaccounted[c as usize] -= 1;
        } else if c == entry.symbol {
            return false;
        }
    }

    // Replay the deriver's second pass in the same left-to-right order:
    // present-elsewhere consumes an occurrence, absent demands none remain.
    for entry in feedback {
        let symbol = entry.symbol as usize;
        match entry.outcome {
            Outcome::Exact => {}
            Outcome::PresentElsewhere => {
                if unaccounted[symbol] == 0 {
                    return false;
                }
                unaccounted[symbol] -= 1;
            }
            Outcome::Absent => {
                if unaccounted[symbol] > 0 {
                    return false;
                }
            }
        }
    }

    true
}

/// Keep the candidates consistent with `feedback`
///
/// Returns a stable subsequence of `pool`: surviving candidates keep their
/// relative order.
#[must_use]
pub fn filter_pool(feedback: &FeedbackVector, pool: &[String]) -> Vec<String> {
    pool.iter()
        .filter(|candidate| is_consistent(feedback, candidate))
        .cloned()
        .collect()
}
