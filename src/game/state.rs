//! Game state for one daily puzzle
//!
//! The state is an explicit value: attempts are appended by the engine one
//! at a time and the terminal status is derived as they arrive.

use crate::config::MAX_ATTEMPTS;
use crate::core::{Evaluation, LetterStatus, Word};
use crate::daily::DayKey;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Best status seen so far for each guessed letter
pub type KeyboardHints = FxHashMap<String, LetterStatus>;

/// A submitted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    evaluation: Evaluation,
}

impl Attempt {
    pub(crate) fn new(word: Word, evaluation: Evaluation) -> Self {
        Self { word, evaluation }
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Letters paired with their statuses, in order
    pub fn tiles(&self) -> impl Iterator<Item = (&str, LetterStatus)> {
        self.word
            .letters()
            .iter()
            .map(String::as_str)
            .zip(self.evaluation.statuses().iter().copied())
    }
}

/// Where the puzzle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a guess was not accepted
///
/// Rejections never change the game state; the player may retry at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("guess must be {expected} letters, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("'{0}' is not in the word list")]
    NotInCatalog(String),
    #[error("today's puzzle is already over")]
    GameAlreadyOver,
}

/// Attempts and status for one day's puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    day_key: DayKey,
    attempts: Vec<Attempt>,
    status: GameStatus,
}

impl GameState {
    /// A fresh, empty game for `day_key`
    #[must_use]
    pub fn new(day_key: DayKey) -> Self {
        Self {
            day_key,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn day_key(&self) -> DayKey {
        self.day_key
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Append an attempt and move to the next status
    ///
    /// Callers check `is_over` first; recording into a finished game is a bug.
    pub(crate) fn record(&mut self, attempt: Attempt) -> GameStatus {
        debug_assert!(!self.is_over(), "attempt recorded after game over");

        let solved = attempt.evaluation.is_all_correct();
        self.attempts.push(attempt);

        self.status = if solved {
            GameStatus::Won
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        self.status
    }

    /// Best status seen for every letter guessed so far
    ///
    /// Priority is Correct > Present > Absent. Recomputed from the attempt
    /// history on every call.
    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        let mut hints = KeyboardHints::default();
        for attempt in &self.attempts {
            for (letter, status) in attempt.tiles() {
                hints
                    .entry(letter.to_owned())
                    .and_modify(|best| *best = (*best).max(status))
                    .or_insert(status);
            }
        }
        hints
    }
}
