//! Starting a session from a word source
//!
//! A session only exists once a solution has been obtained. Until then the
//! game sits in `Lifecycle::Loading` (fetch in flight) or
//! `Lifecycle::Unavailable` (fetch failed), and every action is rejected.

use super::{Action, Rejection, Session, Transition};
use crate::core::Word;
use crate::wordlists::{SourceError, WordSource};
use log::{debug, info, warn};
use rand::Rng;

/// Pick a solution uniformly at random
///
/// # Errors
/// Returns `SourceError::NoUsableWord` if `words` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::core::Word;
/// use wordle_game::game::pick_solution;
///
/// let words = vec![Word::new("crane").unwrap()];
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(pick_solution(&words, &mut rng).unwrap().text(), "crane");
/// ```
pub fn pick_solution<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Word, SourceError> {
    if words.is_empty() {
        return Err(SourceError::NoUsableWord);
    }
    let index = rng.random_range(0..words.len());
    Ok(words[index].clone())
}

/// Fetch candidates from `source`, pick a solution and start a session
///
/// Calling this again after a failure is the retry.
///
/// # Errors
/// Returns `SourceError` if the source fails or yields no usable word.
pub fn start_session<R: Rng + ?Sized>(
    source: &dyn WordSource,
    rng: &mut R,
) -> Result<Session, SourceError> {
    info!("Fetching solution from {}", source.describe());

    let words = source.candidates().inspect_err(|e| warn!("Word source failed: {e}"))?;
    let solution = pick_solution(&words, rng).inspect_err(|e| warn!("{e}"))?;

    debug!("Solution picked from {} candidates: {solution}", words.len());
    Ok(Session::new(solution))
}

/// The game as seen from outside: waiting for a solution, unable to start,
/// or playing
#[derive(Debug, Default)]
pub enum Lifecycle {
    #[default]
    Loading,
    Unavailable(SourceError),
    Playing(Session),
}

impl Lifecycle {
    /// Move out of `Loading` with the outcome of `start_session`
    pub fn resolve(&mut self, outcome: Result<Session, SourceError>) {
        *self = match outcome {
            Ok(session) => Self::Playing(session),
            Err(e) => Self::Unavailable(e),
        };
    }

    /// Apply an action to the session, if there is one
    ///
    /// # Errors
    /// Returns `Rejection::NotStarted` before a session exists, otherwise
    /// whatever the session rejects.
    pub fn apply(&mut self, action: Action) -> Result<Transition, Rejection> {
        match self {
            Self::Playing(session) => session.apply(action),
            Self::Loading | Self::Unavailable(_) => Err(Rejection::NotStarted),
        }
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Playing(session) => Some(session),
            Self::Loading | Self::Unavailable(_) => None,
        }
    }
}
