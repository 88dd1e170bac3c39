//! Daily puzzle selection
//!
//! Maps the current date in the reference timezone to a key and a secret
//! word. No randomness and no server: every player computes the same answer.

mod day_key;
mod selector;

pub use day_key::{DayKey, DayKeyError};
pub use selector::{epoch_day, puzzle_number, secret_index, secret_word};
