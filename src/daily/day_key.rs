//! Calendar-day identity of a puzzle
//!
//! A [`DayKey`] is a date in the fixed reference timezone. Every player on the
//! same reference-zone date gets the same key, whatever their local offset.

use crate::config::reference_offset;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const FORMAT: &str = "%Y-%m-%d";

/// Malformed day key text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a YYYY-MM-DD date")]
pub struct DayKeyError(pub String);

/// A calendar date in the reference timezone, rendered `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Today's key in the reference timezone
    #[must_use]
    pub fn today() -> Self {
        Self::at(Utc::now())
    }

    /// The key for an arbitrary instant
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use daily_wordle::daily::DayKey;
    ///
    /// // 19:00 UTC is already past midnight at UTC+05:30
    /// let instant = Utc.with_ymd_and_hms(2024, 3, 9, 19, 0, 0).unwrap();
    /// assert_eq!(DayKey::at(instant).to_string(), "2024-03-10");
    /// ```
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&reference_offset()).date_naive())
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The following day
    ///
    /// Saturates at chrono's maximum date.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.checked_add_days(Days::new(1)).unwrap_or(self.0))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields; the key format does not
        let well_formed = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(DayKeyError(s.to_owned()));
        }

        NaiveDate::parse_from_str(s, FORMAT)
            .map(Self)
            .map_err(|_| DayKeyError(s.to_owned()))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
