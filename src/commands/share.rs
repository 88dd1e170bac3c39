//! Print the share summary for the saved game

use crate::config::MAX_ATTEMPTS;
use crate::daily::DayKey;
use crate::game::{Session, StateStore};
use crate::wordlists::WordCatalog;
use anyhow::{Context, Result};

/// Print the share text for `day`'s saved game
///
/// Only a finished game is shared; an unfinished one has no score yet.
///
/// # Errors
///
/// Returns an error if the catalog cannot select a word for `day`.
pub fn run_share<S: StateStore>(catalog: &WordCatalog, store: S, day: DayKey) -> Result<()> {
    let session =
        Session::initialize(catalog, store, day).context("cannot open today's puzzle")?;
    println!("{}", share_message(&session));
    Ok(())
}

fn share_message<S: StateStore>(session: &Session<'_, S>) -> String {
    let state = session.state();
    let day = session.day_key();

    if state.attempts().is_empty() {
        format!("No guesses yet for {day}.")
    } else if !state.is_over() {
        format!(
            "The puzzle for {day} is not finished yet ({}/{MAX_ATTEMPTS} guesses used).",
            state.attempts().len()
        )
    } else {
        session.share_text()
    }
}
