//! Decision tree build and dump
//!
//! Builds the full precomputed decision tree for a vocabulary and prints an
//! indented dump: one line per node with the guess to play and, for each
//! branch, the outcome tokens that lead there.

use crate::core::Outcome;
use crate::solver::{DecisionNode, SolverState};
use anyhow::{Context, Result};

/// Build the tree and print it up to `max_depth` levels
pub fn run_tree(
    valid_guesses: &[String],
    possible_answers: &[String],
    max_depth: usize,
) -> Result<()> {
    let state = SolverState::new(valid_guesses.to_vec(), possible_answers.to_vec());
    let tree = DecisionNode::build(&state).context("failed to build the decision tree")?;

    println!(
        "Built a tree of {} nodes, worst case {} guesses",
        tree.size(),
        tree.depth()
    );

    dump(&tree, None, 0, max_depth);
    Ok(())
}

fn dump(node: &DecisionNode, reached_by: Option<&[Outcome]>, depth: usize, max_depth: usize) {
    if depth >= max_depth {
        return;
    }

    let indent = "-".repeat(depth);
    let branch = reached_by.map_or(String::new(), |outcomes| {
        let tokens: String = outcomes.iter().map(|o| o.token()).collect();
        format!("{tokens} -> ")
    });
    let marker = if node.is_terminal() { " (answer)" } else { "" };
    println!("{indent}{branch}{}{marker}", node.guess());

    for (outcomes, child) in node.sorted_children() {
        dump(child, Some(outcomes.as_slice()), depth + 1, max_depth);
    }
}
