//! Error types for the solver core
//!
//! Everything in the core is pure computation, so there is nothing transient
//! to retry: each variant is a hard contract violation reported to the
//! immediate caller.

use std::fmt;

/// Errors reported by the feedback, filtering, ranking, and tree operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Guess and answer (or guess and candidate) lengths differ
    LengthMismatch { expected: usize, actual: usize },
    /// Filtering removed every candidate: the observed feedback is
    /// inconsistent with the pool the solver was given
    EmptyPool,
    /// An operation was requested in a state it cannot serve, e.g. ranking an
    /// empty pool or a singleton pool whose member is not a valid guess
    InvalidState(String),
    /// The precomputed decision tree has no child for an observed outcome
    /// vector (usually a vocabulary mismatch between build and play time)
    TreeTraversalMiss,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Length mismatch: expected {expected} symbols, got {actual}")
            }
            Self::EmptyPool => write!(f, "Feedback is inconsistent with every remaining candidate"),
            Self::InvalidState(msg) => write!(f, "Invalid solver state: {msg}"),
            Self::TreeTraversalMiss => {
                write!(f, "Decision tree has no branch for the observed feedback")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Result alias used throughout the solver core
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_problem() {
        let err = SolverError::LengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert!(err.to_string().contains("expected 5"));
        assert!(err.to_string().contains("got 3"));

        assert!(SolverError::EmptyPool.to_string().contains("inconsistent"));
        assert!(
            SolverError::InvalidState("empty pool".into())
                .to_string()
                .contains("empty pool")
        );
        assert!(
            SolverError::TreeTraversalMiss
                .to_string()
                .contains("no branch")
        );
    }
}
