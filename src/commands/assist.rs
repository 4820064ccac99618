//! Interactive solver assistant
//!
//! Drives a [`SolverState`] against a game played elsewhere (a website, a
//! friend's terminal): prints the ranked guesses, reads the observed
//! feedback, narrows, and repeats until one candidate remains. All textual
//! feedback parsing lives here; the solver core only ever sees validated
//! [`FeedbackVector`]s.

use crate::core::{CharOutcome, FeedbackVector, Outcome};
use crate::output::{print_pool_if_small, print_top_guesses};
use crate::solver::SolverState;
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// Run the interactive assistant loop
pub fn run_assist(valid_guesses: &[String], possible_answers: &[String]) -> Result<()> {
    let word_len = possible_answers.first().map_or(0, String::len);
    let mut solver = SolverState::new(valid_guesses.to_vec(), possible_answers.to_vec());

    println!("Enter feedback as one token per symbol, e.g. `4c 2i 7x`:");
    println!("  c = correct position, i = in the answer elsewhere, x = not in the answer");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let ranked = solver.rank()?;
        print_top_guesses(&ranked, 10);
        print_pool_if_small(solver.pool(), 20);

        if solver.is_solved() {
            println!("Solved: the answer is {}", solver.pool()[0]);
            return Ok(());
        }

        // Re-prompt until the feedback parses; malformed input never
        // reaches the solver
        let feedback = loop {
            print!("Enter feedback: ");
            io::stdout().flush().context("failed to flush prompt")?;

            let Some(line) = lines.next() else {
                bail!("input closed before the puzzle was solved");
            };
            let line = line.context("failed to read feedback")?;

            match parse_feedback(&line, word_len) {
                Ok(feedback) => break feedback,
                Err(reason) => println!("Invalid feedback: {reason}"),
            }
        };

        println!("Parsed: {feedback}");
        solver
            .apply_feedback(&feedback)
            .context("feedback contradicts every remaining candidate")?;
    }
}

/// Parse whitespace-separated `<symbol><c|i|x>` tokens
///
/// Returns a human-readable rejection reason instead of a core error: a
/// malformed line is a re-prompt, not a solver failure.
fn parse_feedback(input: &str, expected_len: usize) -> std::result::Result<FeedbackVector, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != expected_len {
        return Err(format!(
            "expected {expected_len} tokens, got {}",
            tokens.len()
        ));
    }

    let mut entries = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let token = token.to_lowercase();
        let bytes = token.as_bytes();
        if bytes.len() != 2 || !bytes[0].is_ascii_alphanumeric() {
            return Err(format!("malformed token `{token}` at position {i}"));
        }

        let Some(outcome) = Outcome::from_token(bytes[1] as char) else {
            return Err(format!(
                "unknown category `{}` at position {i}, expected c, i, or x",
                bytes[1] as char
            ));
        };

        entries.push(CharOutcome {
            symbol: bytes[0],
            outcome,
        });
    }

    Ok(FeedbackVector::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_feedback() {
        let feedback = parse_feedback("4c 2i 7x", 3).unwrap();
        assert_eq!(feedback.guess_text(), "427");
        assert_eq!(
            feedback.outcomes(),
            vec![Outcome::Exact, Outcome::PresentElsewhere, Outcome::Absent]
        );
    }

    #[test]
    fn uppercase_tokens_are_normalized() {
        let feedback = parse_feedback("Ac Bx", 2).unwrap();
        assert_eq!(feedback.guess_text(), "ab");
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        assert!(parse_feedback("4c 2i", 3).is_err());
        assert!(parse_feedback("", 2).is_err());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(parse_feedback("4cc 2i", 2).is_err()); // too long
        assert!(parse_feedback("4 2i", 2).is_err()); // missing category
        assert!(parse_feedback("4q 2i", 2).is_err()); // unknown category
        assert!(parse_feedback("!c 2i", 2).is_err()); // bad symbol
    }
}
