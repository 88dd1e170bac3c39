//! Daily puzzle engine
//!
//! Game state, the submit/restore state machine, the persisted slot, and
//! the session facade that front-ends drive.

mod puzzle;
mod session;
mod share;
mod state;
pub mod store;

pub use puzzle::Puzzle;
pub use session::{Session, SubmitOutcome};
pub use share::share_text;
pub use state::{Attempt, GameState, GameStatus, KeyboardHints, RejectionReason};
pub use store::{FileStore, MemoryStore, SavedGame, StateStore, StoreError};
