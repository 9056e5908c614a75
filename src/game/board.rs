//! Read-only board view of a session
//!
//! Renderers get exactly `MAX_GUESSES` rows: completed rows with their
//! feedback, the row being typed, and empty rows for guesses not yet made.

use super::Session;
use crate::core::{Feedback, LetterStatus, MAX_GUESSES};
use rustc_hash::FxHashMap;

/// One row of the board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardRow {
    /// Letters shown in the row (0 to 5)
    pub text: String,
    /// Feedback for completed rows, `None` for the current and future rows
    pub feedback: Option<Feedback>,
    /// Whether this is the row currently being typed
    pub is_current: bool,
}

impl Session {
    /// Build the board rows, top to bottom
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{MAX_GUESSES, Word};
    /// use wordle_game::game::Session;
    ///
    /// let mut session = Session::new(Word::new("crane").unwrap());
    /// session.append_letter('c').unwrap();
    ///
    /// let rows = session.rows();
    /// assert_eq!(rows.len(), MAX_GUESSES);
    /// assert_eq!(rows[0].text, "c");
    /// assert!(rows[0].is_current);
    /// ```
    #[must_use]
    pub fn rows(&self) -> Vec<BoardRow> {
        let history = self.history();
        let current = (!self.is_over()).then_some(history.len());

        (0..MAX_GUESSES)
            .map(|i| {
                if let Some(scored) = history.get(i) {
                    BoardRow {
                        text: scored.guess().text().to_string(),
                        feedback: Some(*scored.feedback()),
                        is_current: false,
                    }
                } else if current == Some(i) {
                    BoardRow {
                        text: self.input().to_string(),
                        feedback: None,
                        is_current: true,
                    }
                } else {
                    BoardRow::default()
                }
            })
            .collect()
    }

    /// Best status seen so far for every guessed letter
    ///
    /// Used for keyboard hints: a letter once marked correct stays correct
    /// even if a later guess places it elsewhere.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterStatus> {
        let mut hints: FxHashMap<u8, LetterStatus> = FxHashMap::default();

        for scored in self.history() {
            for (&letter, &status) in scored
                .guess()
                .chars()
                .iter()
                .zip(scored.feedback().statuses())
            {
                hints
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(status))
                    .or_insert(status);
            }
        }

        hints
    }
}
