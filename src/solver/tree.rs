//! Precomputed decision tree
//!
//! Trades offline build time and memory for O(1) per-turn lookups: every
//! node stores the guess to play there and one child per reachable outcome
//! vector. Built once from a [`SolverState`], then traversed as real
//! feedback arrives.

use super::rank::ScoredGuess;
use super::state::SolverState;
use crate::core::{FeedbackVector, Outcome, enumerate_outcomes};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;

/// One node of the precomputed tree
///
/// Children are keyed by outcome-only vectors; the symbols are implied by
/// the node's guess. A node with no children is terminal: it was built from
/// a singleton pool and its guess is the answer there.
#[derive(Debug, Clone)]
pub struct DecisionNode {
    guess: String,
    children: FxHashMap<Vec<Outcome>, DecisionNode>,
}

impl DecisionNode {
    /// Build the tree for a solver session
    ///
    /// Recursively ranks the pool, stores the top guess, and builds one
    /// child per outcome vector with a non-empty sub-pool. A sub-pool of one
    /// candidate becomes a terminal child; an empty sub-pool is simply an
    /// unreachable outcome and gets no child.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidState`] if the best guess at some node
    /// fails to split a multi-candidate pool; a tree built through such a
    /// node could never reach an answer, so the failure is reported rather
    /// than recorded as a leaf. Ranking errors propagate unchanged.
    pub fn build(state: &SolverState) -> Result<Self> {
        let ranked = state.rank()?;
        // rank() guarantees a non-empty result for a non-empty pool
        let guess = ranked
            .last()
            .map(|scored| scored.guess.clone())
            .ok_or_else(|| SolverError::InvalidState("ranking returned no guesses".into()))?;

        if state.pool().len() <= 1 {
            return Ok(Self {
                guess,
                children: FxHashMap::default(),
            });
        }

        let mut children = FxHashMap::default();
        for outcomes in enumerate_outcomes(guess.len()) {
            let feedback = FeedbackVector::from_parts(&guess, &outcomes)?;

            let mut branch = state.clone();
            match branch.apply_feedback(&feedback) {
                Ok(()) => {}
                // No candidate produces this outcome vector for this guess
                Err(SolverError::EmptyPool) => continue,
                Err(other) => return Err(other),
            }

            if branch.pool().len() == state.pool().len() {
                return Err(SolverError::InvalidState(format!(
                    "guess {guess} does not split a pool of {} candidates",
                    state.pool().len()
                )));
            }

            children.insert(outcomes, Self::build(&branch)?);
        }

        Ok(Self { guess, children })
    }

    /// The guess to play at this node
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Child for an observed outcome vector, if the tree planned for it
    #[must_use]
    pub fn child(&self, outcomes: &[Outcome]) -> Option<&Self> {
        self.children.get(outcomes)
    }

    /// True if no further guesses are needed below this node
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including self
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.values().map(Self::size).sum::<usize>()
    }

    /// Longest guess sequence from this node to a terminal, counting self
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .values()
            .map(Self::depth)
            .max()
            .unwrap_or_default()
    }

    /// Iterate children in a deterministic order (sorted by outcome vector)
    pub(crate) fn sorted_children(&self) -> Vec<(&Vec<Outcome>, &Self)> {
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Play-time cursor over a prebuilt decision tree
///
/// Mirrors the [`SolverState`] interface: `rank()` recommends the current
/// node's guess (always at score 0, the tree already paid for the
/// information), `apply_feedback` descends one level, `reset` returns to the
/// root for the next game.
pub struct TreeSolver {
    root: DecisionNode,
    path: Vec<Vec<Outcome>>,
}

impl TreeSolver {
    /// Wrap a built tree, positioned at the root
    #[must_use]
    pub const fn new(root: DecisionNode) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    /// The node the cursor currently points at
    #[must_use]
    pub fn current(&self) -> &DecisionNode {
        let mut node = &self.root;
        for outcomes in &self.path {
            // Path entries were validated by apply_feedback
            if let Some(child) = node.child(outcomes) {
                node = child;
            }
        }
        node
    }

    /// The single stored recommendation for the current position
    #[must_use]
    pub fn rank(&self) -> Vec<ScoredGuess> {
        vec![ScoredGuess {
            guess: self.current().guess().to_string(),
            score: 0.0,
        }]
    }

    /// Descend along an observed outcome vector
    ///
    /// # Errors
    /// Returns [`SolverError::TreeTraversalMiss`] if the current node has no
    /// child for the vector. That means the observed feedback is
    /// inconsistent with the vocabulary the tree was built from; the cursor
    /// stays put and the caller must surface the failure rather than guess
    /// around it.
    pub fn apply_feedback(&mut self, outcomes: &[Outcome]) -> Result<()> {
        if self.current().child(outcomes).is_none() {
            return Err(SolverError::TreeTraversalMiss);
        }
        self.path.push(outcomes.to_vec());
        Ok(())
    }

    /// True once the cursor reached a terminal node
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current().is_terminal()
    }

    /// Return to the root for a fresh game
    pub fn reset(&mut self) {
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive_feedback;

    fn digit_state(digits: u32) -> SolverState {
        let max = 10u32.pow(digits);
        let width = digits as usize;
        let vocab: Vec<String> = (0..max).map(|i| format!("{i:0width$}")).collect();
        SolverState::new(vocab.clone(), vocab)
    }

    #[test]
    fn terminal_tree_for_singleton_pool() {
        let vocab: Vec<String> = (0..10).map(|i| format!("{i}")).collect();
        let state = SolverState::new(vocab, vec!["7".to_string()]);

        let tree = DecisionNode::build(&state).unwrap();
        assert_eq!(tree.guess(), "7");
        assert!(tree.is_terminal());
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn tree_solves_every_answer() {
        // Single-digit universe: the tree must reach every answer by
        // following the real feedback for its recommendations.
        let state = digit_state(1);
        let tree = DecisionNode::build(&state).unwrap();
        let mut player = TreeSolver::new(tree);

        for i in 0..10 {
            let answer = format!("{i}");
            player.reset();

            loop {
                let guess = player.rank()[0].guess.clone();
                let derivation = derive_feedback(&guess, &answer).unwrap();
                if derivation.is_winner {
                    break;
                }
                player
                    .apply_feedback(&derivation.feedback.outcomes())
                    .unwrap();
            }
        }
    }

    #[test]
    fn tree_solves_two_digit_answers() {
        let state = digit_state(2);
        let tree = DecisionNode::build(&state).unwrap();
        let mut player = TreeSolver::new(tree);

        for i in [0, 7, 42, 99] {
            let answer = format!("{i:02}");
            player.reset();

            let mut guesses = 0;
            loop {
                guesses += 1;
                assert!(guesses <= 10, "tree failed to converge on {answer}");

                let guess = player.rank()[0].guess.clone();
                let derivation = derive_feedback(&guess, &answer).unwrap();
                if derivation.is_winner {
                    break;
                }
                player
                    .apply_feedback(&derivation.feedback.outcomes())
                    .unwrap();
            }
        }
    }

    #[test]
    fn rank_returns_stored_guess_at_zero() {
        let state = digit_state(1);
        let tree = DecisionNode::build(&state).unwrap();
        let expected = tree.guess().to_string();

        let player = TreeSolver::new(tree);
        let ranked = player.rank();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].guess, expected);
        assert!(ranked[0].score.abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_outcome_vector_is_a_miss() {
        let state = digit_state(1);
        let tree = DecisionNode::build(&state).unwrap();
        let mut player = TreeSolver::new(tree);
        let before = player.rank()[0].guess.clone();

        // A single-digit guess can never be present-elsewhere
        let result = player.apply_feedback(&[Outcome::PresentElsewhere]);
        assert_eq!(result, Err(SolverError::TreeTraversalMiss));

        // The cursor did not move
        assert_eq!(player.rank()[0].guess, before);
    }

    #[test]
    fn reset_returns_to_the_root() {
        let state = digit_state(1);
        let tree = DecisionNode::build(&state).unwrap();
        let root_guess = tree.guess().to_string();
        let mut player = TreeSolver::new(tree);

        // Descend anywhere reachable, then reset
        let answer = "3";
        let derivation = derive_feedback(&player.rank()[0].guess.clone(), answer).unwrap();
        if !derivation.is_winner {
            player
                .apply_feedback(&derivation.feedback.outcomes())
                .unwrap();
        }

        player.reset();
        assert_eq!(player.rank()[0].guess, root_guess);
    }
}
