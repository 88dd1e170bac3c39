//! Terminal output formatting
//!
//! Board, hint and result rendering for the line-oriented front-end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard_hints, print_rejection, print_result, print_today};
