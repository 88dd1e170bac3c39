//! Core domain types for the puzzle
//!
//! Words, letter statuses and the evaluation algorithm. Everything here is
//! pure: no I/O, no clocks, no shared state.

mod evaluation;
mod word;

pub use evaluation::{Evaluation, EvaluationError, LetterStatus, evaluate};
pub(crate) use evaluation::score;
pub use word::{Word, WordError, letter_count};
