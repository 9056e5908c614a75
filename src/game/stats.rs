//! Statistics across games played in one run
//!
//! Kept in memory only; a new process starts from zero.

use super::{Session, SessionStatus};
use crate::core::MAX_GUESSES;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by number of guesses used (index 0 = one guess)
    pub guess_distribution: [usize; MAX_GUESSES],
}

impl Statistics {
    /// Record a finished session
    ///
    /// Returns `false` and records nothing if the session is still in
    /// progress.
    pub fn record(&mut self, session: &Session) -> bool {
        match session.status() {
            SessionStatus::InProgress => return false,
            SessionStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                if let Some(slot) = self
                    .guess_distribution
                    .get_mut(session.history().len().saturating_sub(1))
                {
                    *slot += 1;
                }
            }
            SessionStatus::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
        true
    }

    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
