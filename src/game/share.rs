//! Spoiler-free result summary
//!
//! ```text
//! 3/5 #845 2024-04-24
//!
//! ⬜🟨⬜⬜
//! 🟩⬜🟨🟩
//! 🟩🟩🟩🟩
//! ```

use super::state::{GameState, GameStatus};
use crate::config::MAX_ATTEMPTS;
use crate::daily::puzzle_number;

/// Build the share text for a game
///
/// The score is the attempt count, or `X` for a lost game. Rows follow the
/// attempts in the order they were made.
#[must_use]
pub fn share_text(state: &GameState) -> String {
    let score = match state.status() {
        GameStatus::Lost => "X".to_string(),
        GameStatus::Won | GameStatus::InProgress => state.attempts().len().to_string(),
    };
    let day = state.day_key();

    let header = format!("{score}/{MAX_ATTEMPTS} #{} {day}", puzzle_number(day));
    if state.attempts().is_empty() {
        return header;
    }

    let rows = state
        .attempts()
        .iter()
        .map(|attempt| attempt.evaluation().to_glyphs())
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header}\n\n{rows}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DayKey;
    use crate::game::Puzzle;
    use crate::wordlists::WordCatalog;

    fn twenty_words() -> WordCatalog {
        WordCatalog::new([
            "able", "acid", "aged", "also", "area", "army", "away", "baby", "back", "ball",
            "band", "bank", "base", "bath", "bear", "beat", "been", "beer", "bell", "belt",
        ])
        .unwrap()
    }

    // epoch day 5
    fn day() -> DayKey {
        "2022-01-06".parse().unwrap()
    }

    #[test]
    fn first_try_win() {
        let catalog = twenty_words();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        assert_eq!(puzzle.secret().text(), "army");

        puzzle.submit("army").unwrap();
        let text = share_text(puzzle.state());
        assert!(text.starts_with("1/5"));
        assert_eq!(text, "1/5 #6 2022-01-06\n\n🟩🟩🟩🟩");
    }

    #[test]
    fn rows_are_chronological() {
        let catalog = twenty_words();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        puzzle.submit("area").unwrap(); // a r _ _ vs a r m y
        puzzle.submit("army").unwrap();

        let text = share_text(puzzle.state());
        let rows: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(rows, ["🟩🟩⬜⬜", "🟩🟩🟩🟩"]);
        assert!(text.starts_with("2/5"));
    }

    #[test]
    fn loss_scores_x() {
        let catalog = twenty_words();
        let mut puzzle = Puzzle::new(&catalog, day()).unwrap();
        for guess in ["bell", "belt", "beer", "been", "beat"] {
            puzzle.submit(guess).unwrap();
        }
        let text = share_text(puzzle.state());
        assert!(text.starts_with("X/5 #6 2022-01-06"));
        assert_eq!(text.lines().count(), 2 + MAX_ATTEMPTS);
    }

    #[test]
    fn empty_game_has_header_only() {
        let catalog = twenty_words();
        let puzzle = Puzzle::new(&catalog, day()).unwrap();
        assert_eq!(share_text(puzzle.state()), "0/5 #6 2022-01-06");
    }
}
