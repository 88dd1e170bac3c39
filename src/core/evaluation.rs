//! Guess evaluation against the secret word
//!
//! Each position of a guess is classified as:
//! - Correct (letter matches the secret at this position)
//! - Present (letter occurs elsewhere in the secret, budget permitting)
//! - Absent (letter does not occur, or all its occurrences are used up)

use super::Word;
use std::fmt;
use thiserror::Error;

/// Per-position classification of a guessed letter
///
/// Ordered by hint strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Share-grid glyph for this status
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Evaluation precondition failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("guess has {guess} letters but the secret has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
}

/// The statuses of one guess, aligned to its letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation(Vec<LetterStatus>);

impl Evaluation {
    /// Wrap a status sequence
    #[must_use]
    pub fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// Statuses in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as a row of share glyphs, e.g. "🟩🟨⬜🟩"
    #[must_use]
    pub fn to_glyphs(&self) -> String {
        self.0.iter().map(|s| s.glyph()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_glyphs())
    }
}

/// Evaluate `guess` against `secret`
///
/// Implements the duplicate-aware two-pass rule: exact matches claim their
/// letters first, then the leftover budget is spent left to right on
/// displaced matches. A letter is never marked Correct or Present more times
/// than it occurs in the secret.
///
/// # Errors
/// Returns `EvaluationError::LengthMismatch` when the words have different
/// letter counts.
///
/// # Examples
/// ```
/// use daily_wordle::core::{evaluate, LetterStatus::*, Word};
///
/// let guess = Word::new("sell").unwrap();
/// let secret = Word::new("bell").unwrap();
/// let evaluation = evaluate(&guess, &secret).unwrap();
///
/// assert_eq!(evaluation.statuses(), [Absent, Correct, Correct, Correct]);
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Result<Evaluation, EvaluationError> {
    if guess.len() != secret.len() {
        return Err(EvaluationError::LengthMismatch {
            guess: guess.len(),
            secret: secret.len(),
        });
    }
    Ok(score(guess, secret))
}

/// The two-pass rule without the length check
///
/// Callers must guarantee `guess.len() == secret.len()`, e.g. because both
/// came from the same catalog.
pub(crate) fn score(guess: &Word, secret: &Word) -> Evaluation {
    debug_assert_eq!(guess.len(), secret.len(), "score needs equal-length words");

    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut remaining = secret.letter_counts();

    // First pass: exact position matches
    for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            result[i] = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(g.as_str()) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: displaced matches from what is left
    for (i, letter) in guess.letters().iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter.as_str())
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Evaluation(result)
}
