//! Fixed puzzle constants
//!
//! The puzzle shape (word length, attempt budget, reference timezone, epoch)
//! is compiled in: changing any of these changes which word every player sees
//! on a given day. Only file locations are configurable at runtime, through
//! command-line flags.

use chrono::{FixedOffset, NaiveDate};

/// Letters per word (grapheme clusters, not bytes)
pub const WORD_LENGTH: usize = 4;

/// Guesses allowed per daily puzzle
pub const MAX_ATTEMPTS: usize = 5;

/// Offset of the reference timezone from UTC, in seconds (UTC+05:30, no DST)
pub const REFERENCE_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Calendar date of puzzle #1, in the reference timezone
pub const PUZZLE_EPOCH: (i32, u32, u32) = (2022, 1, 1);

/// Storage slot used when no `--state` path is given
pub const DEFAULT_STATE_FILE: &str = "daily-wordle.json";

/// Schema tag written into every persisted record
pub const STATE_SCHEMA_VERSION: u32 = 1;

/// The reference timezone as a chrono offset
///
/// # Panics
/// Will not panic - the constant offset is well inside chrono's ±24h range.
#[must_use]
pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_UTC_OFFSET_SECS).expect("reference offset is within ±24h")
}

/// The reference epoch as a date
///
/// # Panics
/// Will not panic - the constant names a real calendar date.
#[must_use]
pub fn puzzle_epoch() -> NaiveDate {
    let (year, month, day) = PUZZLE_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day).expect("puzzle epoch is a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_offset_is_five_thirty_east() {
        assert_eq!(reference_offset().local_minus_utc(), 19_800);
    }

    #[test]
    fn epoch_is_first_of_january_2022() {
        assert_eq!(puzzle_epoch().to_string(), "2022-01-01");
    }
}
