//! Puzzle word representation
//!
//! A Word is split into user-perceived characters (extended grapheme
//! clusters) so that scripts with combining marks count letters the way a
//! reader does.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// A puzzle word, stored with its letters pre-split
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<String>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word '{0}' contains whitespace")]
    Whitespace(String),
}

/// Count the letters of `text` without building a [`Word`]
///
/// # Examples
/// ```
/// use daily_wordle::core::letter_count;
///
/// assert_eq!(letter_count("word"), 4);
/// assert_eq!(letter_count("कमला"), 3);
/// ```
#[must_use]
pub fn letter_count(text: &str) -> usize {
    text.graphemes(true).count()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is kept exactly as given: no case folding, no Unicode
    /// normalization. Length against the puzzle's word size is checked by the
    /// catalog and the engine, not here.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    ///
    /// let word = Word::new("cake").unwrap();
    /// assert_eq!(word.len(), 4);
    /// assert_eq!(word.letter(1), "a");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("no way").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace(text));
        }

        let letters = text.graphemes(true).map(str::to_owned).collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter(&self, position: usize) -> &str {
        &self.letters[position]
    }

    /// Count of each letter in the word
    ///
    /// Used by evaluation to budget duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for letter in &self.letters {
            *counts.entry(letter.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
