//! Game session state machine
//!
//! A `Session` owns one solution, the ordered guess history and the word the
//! player is currently typing. Player actions are applied one at a time; an
//! action that does not fit the current state is rejected without touching
//! anything, so callers are free to ignore rejections.

use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};
use thiserror::Error;

/// A player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AppendLetter(char),
    DeleteLetter,
    SubmitGuess,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    guess: Word,
    feedback: Feedback,
}

impl ScoredGuess {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Successful outcome of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Typed(char),
    Deleted(char),
    Scored {
        feedback: Feedback,
        status: SessionStatus,
    },
}

/// Why an action was ignored
///
/// A rejected action never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("the current guess already has {len} letters", len = WORD_LENGTH)]
    InputFull,
    #[error("there is nothing to delete")]
    InputEmpty,
    #[error("a guess needs {len} letters", len = WORD_LENGTH)]
    IncompleteGuess,
    #[error("the game is already over")]
    SessionOver,
    #[error("the game has not started yet")]
    NotStarted,
}

/// One play-through, from a known solution to a win or loss
#[derive(Debug, Clone)]
pub struct Session {
    solution: Word,
    history: Vec<ScoredGuess>,
    input: String,
    status: SessionStatus,
}

impl Session {
    /// Start a new session for `solution`
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            history: Vec::with_capacity(MAX_GUESSES),
            input: String::with_capacity(WORD_LENGTH),
            status: SessionStatus::InProgress,
        }
    }

    /// Apply one player action
    ///
    /// # Errors
    /// Returns the `Rejection` reason when the action does not apply to the
    /// current state. The session is left unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Action, Rejection, Session, SessionStatus};
    ///
    /// let mut session = Session::new(Word::new("crane").unwrap());
    /// assert_eq!(session.apply(Action::SubmitGuess), Err(Rejection::IncompleteGuess));
    ///
    /// for c in "crane".chars() {
    ///     session.apply(Action::AppendLetter(c)).unwrap();
    /// }
    /// session.apply(Action::SubmitGuess).unwrap();
    /// assert_eq!(session.status(), SessionStatus::Won);
    /// ```
    pub fn apply(&mut self, action: Action) -> Result<Transition, Rejection> {
        if self.status.is_over() {
            return Err(Rejection::SessionOver);
        }

        match action {
            Action::AppendLetter(c) => self.append(c),
            Action::DeleteLetter => self.delete(),
            Action::SubmitGuess => self.submit(),
        }
    }

    /// Shorthand for `apply(Action::AppendLetter(c))`
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn append_letter(&mut self, c: char) -> Result<Transition, Rejection> {
        self.apply(Action::AppendLetter(c))
    }

    /// Shorthand for `apply(Action::DeleteLetter)`
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn delete_letter(&mut self) -> Result<Transition, Rejection> {
        self.apply(Action::DeleteLetter)
    }

    /// Shorthand for `apply(Action::SubmitGuess)`
    ///
    /// # Errors
    /// See [`Session::apply`].
    pub fn submit_guess(&mut self) -> Result<Transition, Rejection> {
        self.apply(Action::SubmitGuess)
    }

    fn append(&mut self, c: char) -> Result<Transition, Rejection> {
        if !c.is_ascii_alphabetic() {
            return Err(Rejection::NotALetter(c));
        }
        if self.input.len() >= WORD_LENGTH {
            return Err(Rejection::InputFull);
        }

        let c = c.to_ascii_lowercase();
        self.input.push(c);
        Ok(Transition::Typed(c))
    }

    fn delete(&mut self) -> Result<Transition, Rejection> {
        self.input
            .pop()
            .map(Transition::Deleted)
            .ok_or(Rejection::InputEmpty)
    }

    fn submit(&mut self) -> Result<Transition, Rejection> {
        // Input only ever holds ASCII letters, so a full buffer is a valid word
        let guess = Word::new(&self.input).map_err(|_| Rejection::IncompleteGuess)?;
        let feedback = Feedback::evaluate(&guess, &self.solution);

        let won = guess == self.solution;
        self.history.push(ScoredGuess { guess, feedback });
        self.input.clear();

        if won {
            self.status = SessionStatus::Won;
        } else if self.history.len() == MAX_GUESSES {
            self.status = SessionStatus::Lost;
        }

        Ok(Transition::Scored {
            feedback,
            status: self.status,
        })
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Scored guesses in the order they were submitted
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }
}
