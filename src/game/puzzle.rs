//! The puzzle engine
//!
//! Accepts guesses for one day, evaluates them against that day's secret
//! word, and restores from a saved game by replaying its guesses.

use super::share::share_text;
use super::state::{Attempt, GameState, KeyboardHints, RejectionReason};
use super::store::SavedGame;
use crate::config::STATE_SCHEMA_VERSION;
use crate::core::{Word, letter_count, score};
use crate::daily::{DayKey, secret_word};
use crate::wordlists::{CatalogError, WordCatalog};
use tracing::{debug, info, warn};

/// One day's puzzle: catalog, secret word and game state
#[derive(Debug, Clone)]
pub struct Puzzle<'c> {
    catalog: &'c WordCatalog,
    secret: Word,
    state: GameState,
}

impl<'c> Puzzle<'c> {
    /// A fresh puzzle for `day`
    ///
    /// # Errors
    /// Returns `CatalogError` if no secret word can be selected.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::daily::DayKey;
    /// use daily_wordle::game::{GameStatus, Puzzle};
    /// use daily_wordle::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::new(["able", "bell", "cake"]).unwrap();
    /// let day: DayKey = "2022-01-03".parse().unwrap(); // selects "cake"
    /// let mut puzzle = Puzzle::new(&catalog, day).unwrap();
    ///
    /// let attempt = puzzle.submit("cake").unwrap();
    /// assert!(attempt.evaluation().is_all_correct());
    /// assert_eq!(puzzle.state().status(), GameStatus::Won);
    /// ```
    pub fn new(catalog: &'c WordCatalog, day: DayKey) -> Result<Self, CatalogError> {
        let secret = secret_word(catalog, day)?.clone();
        Ok(Self {
            catalog,
            secret,
            state: GameState::new(day),
        })
    }

    /// A puzzle for `day`, continued from `saved` if it belongs to that day
    ///
    /// Saved guesses are replayed through [`Puzzle::submit`], so evaluations
    /// and the final status always come from today's secret word. A record
    /// for another day is ignored. Replay stops at the first guess that
    /// would be rejected now.
    ///
    /// # Errors
    /// Returns `CatalogError` if no secret word can be selected.
    pub fn restore(
        catalog: &'c WordCatalog,
        day: DayKey,
        saved: Option<&SavedGame>,
    ) -> Result<Self, CatalogError> {
        let mut puzzle = Self::new(catalog, day)?;

        let Some(saved) = saved else {
            return Ok(puzzle);
        };
        if saved.date != day {
            info!(saved = %saved.date, today = %day, "discarding saved game from another day");
            return Ok(puzzle);
        }

        for (i, guess) in saved.attempts.iter().enumerate() {
            if let Err(reason) = puzzle.submit(guess) {
                warn!(
                    attempt = i + 1,
                    guess = %guess,
                    %reason,
                    "stopping replay of saved game"
                );
                break;
            }
        }

        if saved.game_over != puzzle.state.is_over() || saved.won != puzzle.state.won() {
            warn!(
                saved_over = saved.game_over,
                saved_won = saved.won,
                replayed = ?puzzle.state.status(),
                "saved game flags disagree with replay; using replay"
            );
        }

        debug!(
            attempts = puzzle.state.attempts().len(),
            status = ?puzzle.state.status(),
            "restored saved game"
        );
        Ok(puzzle)
    }

    /// Submit a guess
    ///
    /// Checks run in order: letter count, catalog membership, game over.
    /// A rejected guess leaves the state untouched.
    ///
    /// # Errors
    /// Returns the `RejectionReason` when the guess is not accepted.
    pub fn submit(&mut self, guess: &str) -> Result<Attempt, RejectionReason> {
        let expected = self.catalog.word_length();
        let found = letter_count(guess);
        if found != expected {
            return Err(RejectionReason::WrongLength { expected, found });
        }

        let word = match Word::new(guess) {
            Ok(word) if self.catalog.contains(&word) => word,
            _ => return Err(RejectionReason::NotInCatalog(guess.to_owned())),
        };

        if self.state.is_over() {
            return Err(RejectionReason::GameAlreadyOver);
        }

        // length was checked above and the secret comes from the same catalog
        let evaluation = score(&word, &self.secret);
        let attempt = Attempt::new(word, evaluation);
        let status = self.state.record(attempt.clone());
        debug!(
            guess = %attempt.word(),
            result = %attempt.evaluation(),
            ?status,
            "accepted guess"
        );
        Ok(attempt)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn day_key(&self) -> DayKey {
        self.state.day_key()
    }

    /// Today's secret word
    ///
    /// Front-ends should only reveal it once the game is over.
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn catalog(&self) -> &'c WordCatalog {
        self.catalog
    }

    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        self.state.keyboard_hints()
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(&self.state)
    }

    /// The record to persist for the current state
    #[must_use]
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            version: STATE_SCHEMA_VERSION,
            date: self.state.day_key(),
            attempts: self
                .state
                .attempts()
                .iter()
                .map(|a| a.word().text().to_owned())
                .collect(),
            game_over: self.state.is_over(),
            won: self.state.won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ATTEMPTS;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::game::GameStatus;

    const WORDS: [&str; 8] = [
        "able", "bell", "cake", "bold", "lake", "dark", "tale", "late",
    ];

    fn catalog() -> WordCatalog {
        WordCatalog::new(WORDS).unwrap()
    }

    // epoch day 2 -> "cake"
    fn day() -> DayKey {
        "2022-01-03".parse().unwrap()
    }

    #[test]
    fn selects_secret_for_day() {
        let catalog = catalog();
        let puzzle = Puzzle::new(&catalog, day()).unwrap();
        assert_eq!(puzzle.secret().text(), "cake");
        assert_eq!(puzzle.day_key(), day());
    }

    #[test]
    fn accepted_guess_is_evaluated_and_recorded() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();

        let attempt = puzzle.submit("lake").unwrap();
        assert_eq!(
            attempt.evaluation().statuses(),
            [Absent, Correct, Correct, Correct]
        );
        assert_eq!(puzzle.state().attempts(), [attempt]);
        assert_eq!(puzzle.state().status(), GameStatus::InProgress);
    }

    #[test]
    fn catalog_guesses_score_like_checked_evaluate() {
        let catalog = catalog();
        for guess in WORDS {
            let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
            let attempt = puzzle.submit(guess).unwrap();
            let checked = crate::core::evaluate(attempt.word(), puzzle.secret()).unwrap();
            assert_eq!(attempt.evaluation(), &checked, "{guess}");
        }
    }

    #[test]
    fn wrong_length_is_rejected_first() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        assert_eq!(
            puzzle.submit("cakes"),
            Err(RejectionReason::WrongLength {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            puzzle.submit(""),
            Err(RejectionReason::WrongLength {
                expected: 4,
                found: 0
            })
        );
        assert!(puzzle.state().attempts().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        assert_eq!(
            puzzle.submit("zzzz"),
            Err(RejectionReason::NotInCatalog("zzzz".to_string()))
        );
        assert_eq!(
            puzzle.submit("ca e"),
            Err(RejectionReason::NotInCatalog("ca e".to_string()))
        );
        assert!(puzzle.state().attempts().is_empty());
    }

    #[test]
    fn correct_guess_wins_and_locks_the_game() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();

        puzzle.submit("cake").unwrap();
        assert_eq!(puzzle.state().status(), GameStatus::Won);

        assert_eq!(puzzle.submit("bell"), Err(RejectionReason::GameAlreadyOver));
        assert_eq!(puzzle.state().attempts().len(), 1);
    }

    #[test]
    fn length_and_membership_checked_before_game_over() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        puzzle.submit("cake").unwrap();

        assert!(matches!(
            puzzle.submit("abc"),
            Err(RejectionReason::WrongLength { .. })
        ));
        assert!(matches!(
            puzzle.submit("zzzz"),
            Err(RejectionReason::NotInCatalog(_))
        ));
    }

    #[test]
    fn max_wrong_guesses_lose_on_the_last_one() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        let wrong = ["able", "bell", "bold", "lake", "dark"];
        assert_eq!(wrong.len(), MAX_ATTEMPTS);

        for (i, guess) in wrong.iter().enumerate() {
            puzzle.submit(guess).unwrap();
            let expected = if i + 1 == MAX_ATTEMPTS {
                GameStatus::Lost
            } else {
                GameStatus::InProgress
            };
            assert_eq!(puzzle.state().status(), expected, "after {guess}");
        }
        assert_eq!(puzzle.submit("cake"), Err(RejectionReason::GameAlreadyOver));
    }

    #[test]
    fn repeated_guesses_are_allowed() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        puzzle.submit("bell").unwrap();
        puzzle.submit("bell").unwrap();
        assert_eq!(puzzle.state().attempts().len(), 2);
    }

    #[test]
    fn restore_replays_saved_guesses() {
        let catalog = catalog();
        let mut original = Puzzle::new(&catalog, day()).unwrap();
        original.submit("tale").unwrap();
        original.submit("lake").unwrap();

        let saved = original.to_saved();
        let restored = Puzzle::restore(&catalog, day(), Some(&saved)).unwrap();
        assert_eq!(restored.state(), original.state());
    }

    #[test]
    fn restore_of_finished_game_is_identical() {
        let catalog = catalog();
        let mut original = Puzzle::new(&catalog, day()).unwrap();
        original.submit("bold").unwrap();
        original.submit("cake").unwrap();

        let saved = original.to_saved();
        assert!(saved.game_over && saved.won);

        let restored = Puzzle::restore(&catalog, day(), Some(&saved)).unwrap();
        assert_eq!(restored.state(), original.state());
        assert_eq!(restored.to_saved(), saved);
    }

    #[test]
    fn restore_ignores_stale_day() {
        let catalog = catalog();
        let mut yesterday = Puzzle::new(&catalog, "2022-01-02".parse().unwrap()).unwrap();
        yesterday.submit("bell").unwrap();

        let restored = Puzzle::restore(&catalog, day(), Some(&yesterday.to_saved())).unwrap();
        assert!(restored.state().attempts().is_empty());
        assert_eq!(restored.day_key(), day());
    }

    #[test]
    fn restore_recomputes_status_instead_of_trusting_flags() {
        let catalog = catalog();
        let saved = SavedGame {
            version: STATE_SCHEMA_VERSION,
            date: day(),
            attempts: vec!["bell".to_string()],
            game_over: true,
            won: true,
        };
        let restored = Puzzle::restore(&catalog, day(), Some(&saved)).unwrap();
        assert_eq!(restored.state().status(), GameStatus::InProgress);
        assert!(!restored.to_saved().won);
    }

    #[test]
    fn restore_stops_at_first_unacceptable_guess() {
        let catalog = catalog();
        let saved = SavedGame {
            version: STATE_SCHEMA_VERSION,
            date: day(),
            attempts: vec![
                "bell".to_string(),
                "gone".to_string(), // no longer in the catalog
                "lake".to_string(),
            ],
            game_over: false,
            won: false,
        };
        let restored = Puzzle::restore(&catalog, day(), Some(&saved)).unwrap();
        let words: Vec<&str> = restored
            .state()
            .attempts()
            .iter()
            .map(|a| a.word().text())
            .collect();
        assert_eq!(words, ["bell"]);
    }

    #[test]
    fn restore_drops_guesses_after_the_win() {
        let catalog = catalog();
        let saved = SavedGame {
            version: STATE_SCHEMA_VERSION,
            date: day(),
            attempts: vec!["cake".to_string(), "bell".to_string()],
            game_over: true,
            won: true,
        };
        let restored = Puzzle::restore(&catalog, day(), Some(&saved)).unwrap();
        assert_eq!(restored.state().attempts().len(), 1);
        assert!(restored.state().won());
    }

    #[test]
    fn keyboard_hints_follow_attempts() {
        let catalog = catalog();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        puzzle.submit("late").unwrap();
        // late vs cake: l absent, a correct, t absent, e correct
        let hints = puzzle.keyboard_hints();
        assert_eq!(hints["a"], Correct);
        assert_eq!(hints["l"], Absent);

        puzzle.submit("able").unwrap();
        // able vs cake: a present, b absent, l absent, e correct
        let hints = puzzle.keyboard_hints();
        assert_eq!(hints["a"], Correct, "present never downgrades correct");
        assert_eq!(hints["b"], Absent);
        assert_ne!(hints["e"], Present);
    }
}
