//! Line-oriented game loop
//!
//! Reads one guess per line and prints what the session returns. All game
//! decisions happen in the session.

use crate::game::{GameStatus, Session, StateStore};
use crate::output::{print_board, print_keyboard_hints, print_rejection, print_result};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play<S: StateStore>(session: &mut Session<'_, S>) -> Result<()> {
    let stdin = io::stdin();
    play_lines(session, &mut stdin.lock())
}

/// Run the game loop over any line source
///
/// Ends when the game is over, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error if reading a line or flushing stdout fails.
pub fn play_lines<S: StateStore, R: BufRead>(
    session: &mut Session<'_, S>,
    input: &mut R,
) -> Result<()> {
    let word_length = session.puzzle().catalog().word_length();

    println!(
        "\n{} {}",
        "Daily puzzle".bright_cyan().bold(),
        session.day_key().to_string().bright_yellow()
    );
    println!("Guess the {word_length}-letter word. Type 'quit' to leave; progress is saved.");
    println!("Guesses must be spelled exactly as in the word list (e.g. lowercase).");
    print_board(session.state(), word_length);

    while !session.state().is_over() {
        print!("Guess {}: ", session.state().attempts().len() + 1);
        io::stdout().flush().context("cannot flush stdout")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("cannot read guess")? == 0 {
            println!();
            return Ok(());
        }

        let guess = line.trim();
        if matches!(guess, "quit" | "q" | "exit") {
            println!("\n👋 See you later - your progress is saved.\n");
            return Ok(());
        }
        if guess.is_empty() {
            continue;
        }

        match session.submit(guess) {
            Ok(outcome) => {
                print_board(session.state(), word_length);
                if outcome.status == GameStatus::InProgress {
                    print_keyboard_hints(session.state());
                    println!();
                }
            }
            Err(reason) => print_rejection(&reason),
        }
    }

    print_result(
        session.state(),
        session.puzzle().secret().text(),
        &session.share_text(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MemoryStore;
    use crate::wordlists::WordCatalog;
    use std::io::Cursor;

    fn catalog() -> WordCatalog {
        WordCatalog::new(["able", "bell", "cake"]).unwrap()
    }

    #[test]
    fn plays_until_solved() {
        let catalog = catalog();
        let day = "2022-01-02".parse().unwrap(); // "bell"
        let mut session = Session::initialize(&catalog, MemoryStore::new(), day).unwrap();

        let mut input = Cursor::new("zzzz\nable\n\nbell\ncake\n");
        play_lines(&mut session, &mut input).unwrap();

        let words: Vec<&str> = session
            .state()
            .attempts()
            .iter()
            .map(|a| a.word().text())
            .collect();
        assert_eq!(words, ["able", "bell"]);
        assert!(session.state().won());
    }

    #[test]
    fn quit_leaves_game_in_progress() {
        let catalog = catalog();
        let day = "2022-01-02".parse().unwrap();
        let mut session = Session::initialize(&catalog, MemoryStore::new(), day).unwrap();

        let mut input = Cursor::new("cake\nquit\nbell\n");
        play_lines(&mut session, &mut input).unwrap();

        assert_eq!(session.state().attempts().len(), 1);
        assert_eq!(session.state().status(), GameStatus::InProgress);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let catalog = catalog();
        let day = "2022-01-02".parse().unwrap();
        let mut session = Session::initialize(&catalog, MemoryStore::new(), day).unwrap();

        play_lines(&mut session, &mut Cursor::new("")).unwrap();
        assert!(session.state().attempts().is_empty());
    }
}
