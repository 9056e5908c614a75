//! Core domain types for Wordle
//!
//! Words, letter statuses and the guess evaluator. Everything here is pure and
//! has no knowledge of sessions, word sources or terminals.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{Word, WordError};

/// Number of letters in every guess and solution
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets before the game is lost
pub const MAX_GUESSES: usize = 6;
