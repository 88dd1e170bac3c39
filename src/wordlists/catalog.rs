//! The ordered word catalog
//!
//! Source of truth for daily selection (by index) and guess legality (by
//! membership). Entry order is significant and never altered after loading.

use crate::config::WORD_LENGTH;
use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Catalog construction and access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("word catalog is empty")]
    Empty,
    #[error("catalog entry {index} is invalid: {source}")]
    InvalidWord {
        index: usize,
        #[source]
        source: WordError,
    },
    #[error("catalog entry {index} '{word}' has {found} letters, expected {expected}")]
    WrongLength {
        index: usize,
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("catalog entry {index} '{word}' duplicates entry {first}")]
    Duplicate {
        index: usize,
        first: usize,
        word: String,
    },
    #[error("catalog index {index} out of range for {len} words")]
    IndexOutOfRange { index: usize, len: usize },
}

/// An immutable, ordered list of unique words of one fixed length
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_length: usize,
}

impl WordCatalog {
    /// Build a catalog of [`WORD_LENGTH`]-letter words
    ///
    /// # Errors
    /// See [`WordCatalog::with_length`].
    pub fn new<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_length(entries, WORD_LENGTH)
    }

    /// Build a catalog whose words all have `word_length` letters
    ///
    /// Entries are validated in order and kept in that order.
    ///
    /// # Errors
    /// Returns `CatalogError` if the list is empty, or any entry is not a
    /// valid word, has the wrong letter count, or repeats an earlier entry.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::with_length(["ab", "cd"], 2).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.contains_text("cd"));
    ///
    /// assert!(WordCatalog::with_length(["ab", "ab"], 2).is_err());
    /// ```
    pub fn with_length<I, S>(entries: I, word_length: usize) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = Vec::new();
        let mut index = FxHashMap::default();

        for (i, entry) in entries.into_iter().enumerate() {
            let word =
                Word::new(entry).map_err(|source| CatalogError::InvalidWord { index: i, source })?;

            if word.len() != word_length {
                return Err(CatalogError::WrongLength {
                    index: i,
                    word: word.text().to_owned(),
                    expected: word_length,
                    found: word.len(),
                });
            }

            if let Some(&first) = index.get(word.text()) {
                return Err(CatalogError::Duplicate {
                    index: i,
                    first,
                    word: word.text().to_owned(),
                });
            }

            index.insert(word.text().to_owned(), i);
            words.push(word);
        }

        if words.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            words,
            index,
            word_length,
        })
    }

    /// Membership test for guess legality
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.contains_text(word.text())
    }

    /// Membership test on raw text
    #[inline]
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Bounds-checked access by position
    ///
    /// # Errors
    /// Returns `CatalogError::IndexOutOfRange` if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&Word, CatalogError> {
        self.words.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.words.len(),
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_entry_order() {
        let catalog = WordCatalog::new(["cake", "able", "zone"]).unwrap();
        let texts: Vec<&str> = catalog.iter().map(Word::text).collect();
        assert_eq!(texts, ["cake", "able", "zone"]);
        assert_eq!(catalog.get(2).unwrap().text(), "zone");
    }

    #[test]
    fn membership() {
        let catalog = WordCatalog::new(["cake", "able"]).unwrap();
        assert!(catalog.contains(&Word::new("cake").unwrap()));
        assert!(!catalog.contains(&Word::new("bake").unwrap()));
        assert!(!catalog.contains_text("CAKE"));
    }

    #[test]
    fn get_is_bounds_checked() {
        let catalog = WordCatalog::new(["cake", "able"]).unwrap();
        assert_eq!(catalog.get(1).unwrap().text(), "able");
        assert_eq!(
            catalog.get(2),
            Err(CatalogError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn empty_catalog_is_a_configuration_error() {
        let err = WordCatalog::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
    }

    #[test]
    fn wrong_length_entry_is_rejected() {
        let err = WordCatalog::new(["cake", "cakes"]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::WrongLength {
                index: 1,
                word: "cakes".to_string(),
                expected: 4,
                found: 5
            }
        );
    }

    #[test]
    fn duplicates_are_rejected_not_dropped() {
        let err = WordCatalog::new(["cake", "able", "cake"]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Duplicate {
                index: 2,
                first: 0,
                word: "cake".to_string()
            }
        );
    }

    #[test]
    fn invalid_word_is_rejected() {
        let err = WordCatalog::new(["cake", ""]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidWord {
                index: 1,
                source: WordError::Empty
            }
        ));
    }

    #[test]
    fn grapheme_length_counts_letters() {
        let catalog = WordCatalog::with_length(["कमला"], 3).unwrap();
        assert_eq!(catalog.word_length(), 3);
    }
}
