//! Human-playable terminal game

use crate::game::Game;
use crate::output::paint_feedback;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run an interactive game against a hidden answer
///
/// The answer is fixed if given, otherwise drawn at random from the
/// vocabulary. Invalid guesses (wrong length) are re-prompted and do not
/// consume a turn.
pub fn run_play(vocabulary: &[String], answer: Option<String>, num_guesses: u32) -> Result<()> {
    let mut game = match answer {
        Some(fixed) => Game::new(fixed, num_guesses),
        None => Game::with_random_answer(vocabulary, num_guesses)?,
    };

    println!(
        "Valid guesses are between {} and {}",
        vocabulary.first().map_or("", String::as_str),
        vocabulary.last().map_or("", String::as_str),
    );
    println!(
        "A symbol in the right position shows {}, elsewhere in the answer {}, absent {}",
        "green".black().on_green(),
        "yellow".black().on_yellow(),
        "white".black().on_white(),
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_finished() {
        print!("Enter a guess: ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let guess = line.context("failed to read guess")?.trim().to_lowercase();

        match game.step(&guess) {
            Ok(feedback) => {
                let painted = paint_feedback(&feedback);
                if !game.is_finished() {
                    println!(
                        "Guesses remaining: {}  Result: {painted}",
                        game.guesses_remaining()
                    );
                }
            }
            Err(err) => println!("Invalid guess: {err}"),
        }
    }

    if game.is_won() {
        // Last feedback is all green by definition of winning
        let painted = game.history().last().map(paint_feedback).unwrap_or_default();
        println!("Winner! The answer was {painted}.");
    } else {
        println!("Sorry! The answer was {}. Try again!", game.answer());
    }

    Ok(())
}
