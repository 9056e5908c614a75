//! Game session and everything around it
//!
//! `Session` is the state machine for one game. `bootstrap` gates session
//! start on a resolved solution, `board` exposes read-only views for
//! renderers and `stats` tallies finished games.

mod board;
mod bootstrap;
mod session;
mod stats;

pub use board::BoardRow;
pub use bootstrap::{Lifecycle, pick_solution, start_session};
pub use session::{Action, Rejection, ScoredGuess, Session, SessionStatus, Transition};
pub use stats::Statistics;
