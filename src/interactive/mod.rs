//! Interactive TUI
//!
//! Key events are translated into game actions by `input`, applied by the
//! `App` and drawn by `rendering`.

mod app;
pub mod input;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
