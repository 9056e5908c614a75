//! Simple line-based mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::{MAX_GUESSES, Word};
use crate::game::{Session, Statistics, start_session};
use crate::output::{print_board, print_game_over, print_statistics};
use crate::wordlists::{SourceError, WordSource};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Finished,
    Quit,
}

/// Run the simple line mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(
    source: &dyn WordSource,
    rng: &mut R,
    reveal: bool,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Line Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden 5-letter word in 6 tries. After each guess:");
    println!("  - 🟩 letter is in the right spot");
    println!("  - 🟨 letter is in the word, but elsewhere");
    println!("  - ⬜ letter is not in the word\n");
    println!("Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stats = Statistics::default();

    loop {
        let mut session = match fetch_with_spinner(source, rng) {
            Ok(session) => session,
            Err(e) => {
                println!("❌ Cannot start a game: {e}");
                if ask_yes_no(&mut reader, "Try again? (yes/no)")? {
                    continue;
                }
                return Ok(());
            }
        };

        if reveal {
            println!("(solution: {})", session.solution().text().to_uppercase());
        }

        if play_round(&mut session, &mut reader)? == RoundEnd::Quit {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        print_game_over(&session);
        stats.record(&session);
        print_statistics(&stats);

        if !ask_yes_no(&mut reader, "\nPlay again? (yes/no)")? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

fn fetch_with_spinner<R: Rng + ?Sized>(
    source: &dyn WordSource,
    rng: &mut R,
) -> Result<Session, SourceError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching a word from {}...", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = start_session(source, rng);
    spinner.finish_and_clear();
    outcome
}

/// Play one session to the end, reading one guess per line
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn play_round<B: BufRead>(session: &mut Session, reader: &mut B) -> Result<RoundEnd> {
    while !session.is_over() {
        print_board(session);

        let prompt = format!("Guess {}/{MAX_GUESSES}", session.history().len() + 1);
        let Some(line) = read_line(reader, &prompt)? else {
            return Ok(RoundEnd::Quit);
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(RoundEnd::Quit),
            "" => continue,
            _ => {}
        }

        let word = match Word::new(&line) {
            Ok(word) => word,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        for c in word.text().chars() {
            session.append_letter(c)?;
        }
        let transition = session.submit_guess()?;
        debug!("{word}: {transition:?}");
    }

    print_board(session);
    Ok(RoundEnd::Finished)
}

/// Ask a yes/no question; end of input counts as "no"
fn ask_yes_no<B: BufRead>(reader: &mut B, prompt: &str) -> Result<bool> {
    let answer = read_line(reader, prompt)?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Read one trimmed line after a prompt, `None` at end of input
fn read_line<B: BufRead>(reader: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionStatus;
    use std::io::Cursor;

    fn session(solution: &str) -> Session {
        Session::new(Word::new(solution).unwrap())
    }

    #[test]
    fn round_skips_invalid_lines_and_wins() {
        let mut s = session("crane");
        let mut input = Cursor::new("tr\nslate!\n\ntrace\nCRANE\n");

        assert_eq!(play_round(&mut s, &mut input).unwrap(), RoundEnd::Finished);
        assert_eq!(s.status(), SessionStatus::Won);
        let guesses: Vec<&str> = s.history().iter().map(|g| g.guess().text()).collect();
        assert_eq!(guesses, ["trace", "crane"]);
    }

    #[test]
    fn round_loses_after_six_guesses() {
        let mut s = session("crane");
        let mut input = Cursor::new("slate\n".repeat(MAX_GUESSES + 2));

        assert_eq!(play_round(&mut s, &mut input).unwrap(), RoundEnd::Finished);
        assert_eq!(s.status(), SessionStatus::Lost);
        assert_eq!(s.history().len(), MAX_GUESSES);
    }

    #[test]
    fn round_quits_on_command_or_eof() {
        let mut s = session("crane");
        assert_eq!(
            play_round(&mut s, &mut Cursor::new("slate\nquit\n")).unwrap(),
            RoundEnd::Quit
        );
        assert_eq!(s.history().len(), 1);

        let mut s = session("crane");
        assert_eq!(play_round(&mut s, &mut Cursor::new("")).unwrap(), RoundEnd::Quit);
        assert_eq!(s.status(), SessionStatus::InProgress);
    }

    #[test]
    fn yes_no_answers() {
        assert!(ask_yes_no(&mut Cursor::new("y\n"), "?").unwrap());
        assert!(ask_yes_no(&mut Cursor::new("YES\n"), "?").unwrap());
        assert!(!ask_yes_no(&mut Cursor::new("no\n"), "?").unwrap());
        assert!(!ask_yes_no(&mut Cursor::new(""), "?").unwrap());
    }
}
