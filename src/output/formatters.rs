//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::{Attempt, GameState, KeyboardHints};
use colored::{ColoredString, Colorize};

/// A single board tile, coloured by status
///
/// Letters are shown exactly as typed; guesses are matched case-sensitively.
#[must_use]
pub fn tile(letter: &str, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// One board row for an attempt
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    attempt
        .tiles()
        .map(|(letter, status)| tile(letter, status).to_string())
        .collect()
}

/// An empty board row of `width` blank tiles
#[must_use]
pub fn empty_row(width: usize) -> String {
    " _ ".repeat(width).bright_black().to_string()
}

/// All board rows: attempts first, then one blank row per guess left
#[must_use]
pub fn board_rows(state: &GameState, word_length: usize) -> Vec<String> {
    state
        .attempts()
        .iter()
        .map(attempt_row)
        .chain(std::iter::repeat_n(empty_row(word_length), state.attempts_left()))
        .collect()
}

/// Guessed letters grouped by hint, best first
///
/// Returns `(status, letters)` pairs with letters sorted, skipping empty
/// groups.
#[must_use]
pub fn hint_groups(hints: &KeyboardHints) -> Vec<(LetterStatus, Vec<&str>)> {
    [
        LetterStatus::Correct,
        LetterStatus::Present,
        LetterStatus::Absent,
    ]
    .into_iter()
    .filter_map(|status| {
        let mut letters: Vec<&str> = hints
            .iter()
            .filter(|&(_, &s)| s == status)
            .map(|(letter, _)| letter.as_str())
            .collect();
        if letters.is_empty() {
            return None;
        }
        letters.sort_unstable();
        Some((status, letters))
    })
    .collect()
}

/// Label for a hint group
#[must_use]
pub const fn status_label(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Correct => "In place",
        LetterStatus::Present => "In word",
        LetterStatus::Absent => "Not in word",
    }
}
