//! Guess evaluation and per-letter feedback
//!
//! Each guessed letter is classified as one of:
//! - Correct: right letter in the right position
//! - Present: letter is in the solution, but elsewhere
//! - Absent: letter is not in the solution (or every instance is already used)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Correctness of a single guessed letter
///
/// Ordered from least to most informative, so `max` gives the best status
/// seen for a letter across several guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess: one status per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as correct and take those
    ///    solution letters out of the pool
    /// 2. Second pass: for every other position, consume the first remaining
    ///    pool letter equal to the guessed letter and mark it present
    ///
    /// Each solution letter satisfies at most one guessed letter, and exact
    /// matches are always resolved first.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let solution = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &solution);
    ///
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.chars();
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut pool: [Option<u8>; WORD_LENGTH] = (*solution.chars()).map(Some);

        for (i, &letter) in guess.iter().enumerate() {
            if pool[i] == Some(letter) {
                result[i] = LetterStatus::Correct;
                pool[i] = None;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = LetterStatus::Present;
                *slot = None;
            }
        }

        Self(result)
    }

    /// Per-position statuses, left to right
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
