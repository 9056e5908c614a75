//! Key event translation
//!
//! Turns crossterm key events into game actions or app commands. Anything
//! else is ignored.

use crate::game::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Game(Action),
    Command(Command),
}

/// App-level commands, available in every state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Start a new game, or retry a failed word fetch
    NewGame,
}

/// Translate one key event
///
/// Only key presses count (repeat/release events are ignored, which also
/// avoids double input on Windows).
#[must_use]
pub fn translate(key: &KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(Input::Command(Command::Quit)),
        KeyCode::Char('c') if ctrl => Some(Input::Command(Command::Quit)),
        KeyCode::Char('n') if ctrl => Some(Input::Command(Command::NewGame)),
        KeyCode::Char(c) if !ctrl && !alt && c.is_ascii_alphabetic() => {
            Some(Input::Game(Action::AppendLetter(c)))
        }
        KeyCode::Backspace | KeyCode::Delete => Some(Input::Game(Action::DeleteLetter)),
        KeyCode::Enter => Some(Input::Game(Action::SubmitGuess)),
        _ => None,
    }
}
