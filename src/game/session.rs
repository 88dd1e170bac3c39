//! Boundary facade for front-ends
//!
//! A [`Session`] ties today's puzzle to its store: it restores on
//! initialization and persists after every accepted guess. Front-ends only
//! talk to this type.

use super::puzzle::Puzzle;
use super::state::{Attempt, GameState, GameStatus, KeyboardHints, RejectionReason};
use super::store::StateStore;
use crate::daily::DayKey;
use crate::wordlists::{CatalogError, WordCatalog};
use tracing::{error, info};

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub attempt: Attempt,
    pub status: GameStatus,
}

/// Today's puzzle plus the slot it is saved in
pub struct Session<'c, S: StateStore> {
    puzzle: Puzzle<'c>,
    store: S,
}

impl<'c, S: StateStore> Session<'c, S> {
    /// Open the puzzle for `day`, restoring from `store` when it holds that day
    ///
    /// # Errors
    /// Returns `CatalogError` if no secret word can be selected.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::game::{MemoryStore, Session};
    /// use daily_wordle::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::new(["able", "bell", "cake"]).unwrap();
    /// let day = "2022-01-02".parse().unwrap(); // selects "bell"
    ///
    /// let mut session = Session::initialize(&catalog, MemoryStore::new(), day).unwrap();
    /// session.submit("able").unwrap();
    ///
    /// // a second session on the same day picks up where the first left off
    /// let store = session.into_store();
    /// let session = Session::initialize(&catalog, store, day).unwrap();
    /// assert_eq!(session.state().attempts().len(), 1);
    /// ```
    pub fn initialize(catalog: &'c WordCatalog, store: S, day: DayKey) -> Result<Self, CatalogError> {
        let saved = store.load();
        let puzzle = Puzzle::restore(catalog, day, saved.as_ref())?;
        info!(
            %day,
            attempts = puzzle.state().attempts().len(),
            status = ?puzzle.state().status(),
            "opened daily puzzle"
        );
        Ok(Self { puzzle, store })
    }

    /// Submit a guess and persist the new state if it was accepted
    ///
    /// A failed write is logged and play continues.
    ///
    /// # Errors
    /// Returns the `RejectionReason` when the guess is not accepted.
    pub fn submit(&mut self, guess: &str) -> Result<SubmitOutcome, RejectionReason> {
        let attempt = self.puzzle.submit(guess)?;
        let status = self.puzzle.state().status();

        if let Err(err) = self.store.save(&self.puzzle.to_saved()) {
            error!(error = %err, "could not save game; progress will not survive a restart");
        }

        if status.is_over() {
            info!(?status, attempts = self.puzzle.state().attempts().len(), "puzzle finished");
        }
        Ok(SubmitOutcome { attempt, status })
    }

    #[must_use]
    pub fn day_key(&self) -> DayKey {
        self.puzzle.day_key()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.puzzle.state()
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle<'c> {
        &self.puzzle
    }

    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        self.puzzle.keyboard_hints()
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        self.puzzle.share_text()
    }

    /// Give back the store, e.g. to reopen the same slot
    pub fn into_store(self) -> S {
        self.store
    }
}
