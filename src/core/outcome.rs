//! Per-position feedback model
//!
//! Every guess position gets one of three outcomes. A whole guess produces a
//! [`FeedbackVector`]: one `(symbol, Outcome)` pair per position, in guess
//! order. With L positions there are exactly 3^L distinct outcome vectors,
//! and [`enumerate_outcomes`] walks them in a fixed order.

use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for a single guess position
///
/// The declaration order defines the total order used to enumerate outcome
/// vectors deterministically: `Absent < PresentElsewhere < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// Symbol does not appear in the answer (or all its occurrences are
    /// already accounted for)
    Absent,
    /// Symbol appears in the answer, but not at this position
    PresentElsewhere,
    /// Symbol is at exactly this position in the answer
    Exact,
}

impl Outcome {
    /// Single-letter token used in textual feedback: `c`orrect, `i`n word,
    /// `x` wrong
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Exact => 'c',
            Self::PresentElsewhere => 'i',
            Self::Absent => 'x',
        }
    }

    /// Parse a feedback token (inverse of [`Outcome::token`])
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'c' => Some(Self::Exact),
            'i' => Some(Self::PresentElsewhere),
            'x' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// One guess symbol together with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharOutcome {
    /// The guessed symbol (validated ASCII byte)
    pub symbol: u8,
    /// Feedback for this position
    pub outcome: Outcome,
}

/// Ordered per-position feedback for one guess
///
/// Position `i` describes the `i`-th symbol of the guess that produced it,
/// so the vector carries the guess itself alongside the outcomes.
///
/// # Examples
/// ```
/// use entroguess::core::{derive_feedback, Outcome};
///
/// let derivation = derive_feedback("222", "122").unwrap();
/// let feedback = derivation.feedback;
///
/// assert_eq!(feedback.guess_text(), "222");
/// assert_eq!(
///     feedback.outcomes(),
///     vec![Outcome::Absent, Outcome::Exact, Outcome::Exact]
/// );
/// assert!(!feedback.is_winner());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackVector(Vec<CharOutcome>);

impl FeedbackVector {
    /// Wrap a sequence of per-position outcomes
    #[must_use]
    pub const fn new(entries: Vec<CharOutcome>) -> Self {
        Self(entries)
    }

    /// Pair a guess with outcome-only feedback
    ///
    /// # Errors
    /// Returns [`SolverError::LengthMismatch`] if `guess` and `outcomes`
    /// have different lengths.
    pub fn from_parts(guess: &str, outcomes: &[Outcome]) -> Result<Self> {
        if guess.len() != outcomes.len() {
            return Err(SolverError::LengthMismatch {
                expected: guess.len(),
                actual: outcomes.len(),
            });
        }

        Ok(Self(
            guess
                .bytes()
                .zip(outcomes.iter().copied())
                .map(|(symbol, outcome)| CharOutcome { symbol, outcome })
                .collect(),
        ))
    }

    /// Number of positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the vector has no positions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over per-position entries
    pub fn iter(&self) -> std::slice::Iter<'_, CharOutcome> {
        self.0.iter()
    }

    /// The guess that produced this feedback, reassembled from the symbols
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.0.iter().map(|entry| entry.symbol as char).collect()
    }

    /// Outcome-only view, dropping the symbols
    #[must_use]
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.0.iter().map(|entry| entry.outcome).collect()
    }

    /// True iff every position is [`Outcome::Exact`]
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.0.iter().all(|entry| entry.outcome == Outcome::Exact)
    }
}

impl<'a> IntoIterator for &'a FeedbackVector {
    type Item = &'a CharOutcome;
    type IntoIter = std::slice::Iter<'a, CharOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FeedbackVector {
    /// Token form, e.g. `2i 1c 3x` for yellow-green-gray `213`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", entry.symbol as char, entry.outcome.token())?;
        }
        Ok(())
    }
}

/// Enumerate every outcome-only vector of the given length
///
/// Yields all 3^len vectors in lexicographic order under
/// `Absent < PresentElsewhere < Exact`, leftmost position most significant.
/// The order is part of the contract: ranking, scoring, and tree building
/// all rely on it being stable across runs.
///
/// # Examples
/// ```
/// use entroguess::core::{enumerate_outcomes, Outcome};
///
/// let all: Vec<_> = enumerate_outcomes(2).collect();
/// assert_eq!(all.len(), 9);
/// assert_eq!(all[0], vec![Outcome::Absent, Outcome::Absent]);
/// assert_eq!(all[1], vec![Outcome::Absent, Outcome::PresentElsewhere]);
/// assert_eq!(all[8], vec![Outcome::Exact, Outcome::Exact]);
/// ```
#[must_use]
pub fn enumerate_outcomes(len: usize) -> OutcomeVectors {
    OutcomeVectors {
        len,
        next: 0,
        total: 3usize.pow(len as u32),
    }
}

/// Iterator over all outcome vectors of a fixed length
///
/// Created by [`enumerate_outcomes`].
pub struct OutcomeVectors {
    len: usize,
    next: usize,
    total: usize,
}

impl Iterator for OutcomeVectors {
    type Item = Vec<Outcome>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }

        let mut index = self.next;
        self.next += 1;

        // Decode base-3 digits, leftmost position most significant
        let mut vector = vec![Outcome::Absent; self.len];
        for slot in vector.iter_mut().rev() {
            *slot = match index % 3 {
                0 => Outcome::Absent,
                1 => Outcome::PresentElsewhere,
                _ => Outcome::Exact,
            };
            index /= 3;
        }

        Some(vector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OutcomeVectors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_total_order() {
        assert!(Outcome::Absent < Outcome::PresentElsewhere);
        assert!(Outcome::PresentElsewhere < Outcome::Exact);
    }

    #[test]
    fn outcome_token_round_trip() {
        for outcome in [Outcome::Absent, Outcome::PresentElsewhere, Outcome::Exact] {
            assert_eq!(Outcome::from_token(outcome.token()), Some(outcome));
        }
        assert_eq!(Outcome::from_token('q'), None);
    }

    #[test]
    fn from_parts_pairs_symbols_with_outcomes() {
        let fv = FeedbackVector::from_parts("12", &[Outcome::Exact, Outcome::Absent]).unwrap();
        assert_eq!(fv.len(), 2);
        assert_eq!(fv.guess_text(), "12");
        assert_eq!(fv.outcomes(), vec![Outcome::Exact, Outcome::Absent]);
    }

    #[test]
    fn from_parts_rejects_length_mismatch() {
        let result = FeedbackVector::from_parts("123", &[Outcome::Exact]);
        assert_eq!(
            result,
            Err(SolverError::LengthMismatch {
                expected: 3,
                actual: 1,
            })
        );
    }

    #[test]
    fn is_winner_requires_all_exact() {
        let all_exact = FeedbackVector::from_parts("12", &[Outcome::Exact, Outcome::Exact]).unwrap();
        assert!(all_exact.is_winner());

        let one_off =
            FeedbackVector::from_parts("12", &[Outcome::Exact, Outcome::PresentElsewhere]).unwrap();
        assert!(!one_off.is_winner());
    }

    #[test]
    fn display_uses_feedback_tokens() {
        let fv = FeedbackVector::from_parts(
            "213",
            &[Outcome::PresentElsewhere, Outcome::Exact, Outcome::Absent],
        )
        .unwrap();
        assert_eq!(fv.to_string(), "2i 1c 3x");
    }

    #[test]
    fn enumeration_covers_all_vectors_exactly_once() {
        let all: Vec<_> = enumerate_outcomes(3).collect();
        assert_eq!(all.len(), 27);

        let unique: std::collections::HashSet<_> = all.iter().cloned().collect();
        assert_eq!(unique.len(), 27);
    }

    #[test]
    fn enumeration_is_lexicographic() {
        let all: Vec<_> = enumerate_outcomes(2).collect();
        for window in all.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn enumeration_of_length_zero_is_the_empty_vector() {
        let all: Vec<_> = enumerate_outcomes(0).collect();
        assert_eq!(all, vec![Vec::<Outcome>::new()]);
    }

    #[test]
    fn enumeration_reports_exact_size() {
        let iter = enumerate_outcomes(4);
        assert_eq!(iter.len(), 81);
    }
}
