//! Display functions for the game front-end

use super::formatters::{board_rows, hint_groups, status_label};
use crate::daily::{DayKey, puzzle_number};
use crate::game::{GameState, GameStatus, RejectionReason};
use colored::Colorize;

/// Print the board: one row per attempt, then blank rows for what is left
pub fn print_board(state: &GameState, word_length: usize) {
    println!();
    for row in board_rows(state, word_length) {
        println!("  {row}");
    }
    println!();
}

/// Print which guessed letters are in place, in the word, or ruled out
pub fn print_keyboard_hints(state: &GameState) {
    let hints = state.keyboard_hints();
    for (status, letters) in hint_groups(&hints) {
        println!("  {:<12} {}", format!("{}:", status_label(status)), letters.join(" "));
    }
}

/// Print a rejected guess as a transient message
pub fn print_rejection(reason: &RejectionReason) {
    println!("{}", format!("✗ {reason}").red());
}

/// Print the end-of-game banner, the answer and the share text
pub fn print_result(state: &GameState, secret: &str, share: &str) {
    println!("{}", "═".repeat(40).cyan());
    match state.status() {
        GameStatus::Won => {
            let count = state.attempts().len();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {count} {}!",
                    if count == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                secret.bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(40).cyan());
    println!("\n{share}\n");
}

/// Print today's puzzle identity
pub fn print_today(day: DayKey) {
    println!(
        "Puzzle {} for {}",
        format!("#{}", puzzle_number(day)).bright_cyan().bold(),
        day.to_string().bright_yellow()
    );
    println!("Next puzzle: {}", day.next());
}
