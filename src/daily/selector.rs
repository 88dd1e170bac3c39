//! Day key to secret word mapping
//!
//! `index = epoch_day mod catalog.len()`. The sequence of daily words only
//! stays stable while the catalog is append-only: inserting, removing or
//! reordering earlier entries shifts every later day. Once `len` days have
//! passed the sequence repeats from the start.

use super::DayKey;
use crate::config::puzzle_epoch;
use crate::core::Word;
use crate::wordlists::{CatalogError, WordCatalog};
use tracing::debug;

/// Whole days from the puzzle epoch to `day`
///
/// Negative before the epoch.
#[must_use]
pub fn epoch_day(day: DayKey) -> i64 {
    day.date().signed_duration_since(puzzle_epoch()).num_days()
}

/// One-based puzzle number shown in the share summary
#[must_use]
pub fn puzzle_number(day: DayKey) -> i64 {
    epoch_day(day) + 1
}

/// Catalog position of the secret word for `day`
///
/// # Errors
/// Returns `CatalogError::Empty` if `catalog_len` is zero.
pub fn secret_index(catalog_len: usize, day: DayKey) -> Result<usize, CatalogError> {
    if catalog_len == 0 {
        return Err(CatalogError::Empty);
    }
    let len = i64::try_from(catalog_len).unwrap_or(i64::MAX);
    // rem_euclid keeps pre-epoch days in range
    Ok(epoch_day(day).rem_euclid(len) as usize)
}

/// The secret word for `day`
///
/// # Errors
/// Returns `CatalogError::Empty` if the catalog has no words.
///
/// # Examples
/// ```
/// use daily_wordle::daily::{DayKey, secret_word};
/// use daily_wordle::wordlists::WordCatalog;
///
/// let catalog = WordCatalog::new(["able", "bell", "cake"]).unwrap();
/// let day: DayKey = "2022-01-02".parse().unwrap(); // epoch day 1
/// assert_eq!(secret_word(&catalog, day).unwrap().text(), "bell");
/// ```
pub fn secret_word(catalog: &WordCatalog, day: DayKey) -> Result<&Word, CatalogError> {
    let index = secret_index(catalog.len(), day)?;
    debug!(%day, index, "selected daily word");
    catalog.get(index)
}
