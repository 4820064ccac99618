//! Entropy-based solving engine
//!
//! Filtering, scoring, ranking, the mutable solving session, and the
//! precomputed decision tree.

mod entropy;
mod filter;
mod rank;
mod state;
mod tree;

pub use entropy::{score, score_by_enumeration};
pub use filter::{filter_pool, is_consistent};
pub use rank::{BATCH_SIZE, ScoredGuess, rank_guesses, rank_guesses_serial};
pub use state::SolverState;
pub use tree::{DecisionNode, TreeSolver};
