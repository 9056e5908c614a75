//! Wordle
//!
//! A single-player Wordle: guess a hidden five-letter word in six tries, with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Session, SessionStatus};
//!
//! let mut session = Session::new(Word::new("crane").unwrap());
//! for c in "trace".chars() {
//!     session.append_letter(c).unwrap();
//! }
//! session.submit_guess().unwrap();
//!
//! println!("{}", session.history()[0].feedback()); // ⬜🟩🟩🟨🟩
//! assert_eq!(session.status(), SessionStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists and solution sources
pub mod wordlists;

// Runtime configuration and logging
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
