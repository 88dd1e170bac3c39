//! Daily Wordle
//!
//! A once-a-day word puzzle: every player on the same calendar date (in a
//! fixed reference timezone) gets the same secret word, with no server.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::daily::DayKey;
//! use daily_wordle::game::{GameStatus, MemoryStore, Session};
//! use daily_wordle::wordlists::loader::embedded_catalog;
//!
//! let catalog = embedded_catalog().unwrap();
//! let day: DayKey = "2024-10-16".parse().unwrap();
//!
//! let mut session = Session::initialize(&catalog, MemoryStore::new(), day).unwrap();
//! let outcome = session.submit("cake").unwrap();
//! println!("{}", outcome.attempt.evaluation());
//! assert!(outcome.status == GameStatus::InProgress || outcome.status == GameStatus::Won);
//! ```

// Fixed puzzle constants
pub mod config;

// Core domain types
pub mod core;

// Daily word selection
pub mod daily;

// Puzzle engine, persistence and session facade
pub mod game;

// Word catalog
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
