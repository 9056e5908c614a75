//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// A single colored letter tile like " A "
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match status {
        LetterStatus::Correct => tile.black().on_green(),
        LetterStatus::Present => tile.black().on_yellow(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn tile_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| letter_tile(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters typed so far, padded with dots to the word length
#[must_use]
pub fn pending_row(input: &str) -> String {
    let mut row: String = input.to_uppercase();
    for _ in input.len()..WORD_LENGTH {
        row.push('·');
    }
    row
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_row_pads_with_dots() {
        assert_eq!(pending_row(""), "·····");
        assert_eq!(pending_row("cr"), "CR···");
        assert_eq!(pending_row("crane"), "CRANE");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn tile_row_contains_every_letter() {
        let guess = crate::core::Word::new("trace").unwrap();
        let solution = crate::core::Word::new("crane").unwrap();
        let feedback = Feedback::evaluate(&guess, &solution);

        let row = tile_row(guess.text(), &feedback);
        for letter in ["T", "R", "A", "C", "E"] {
            assert!(row.contains(letter), "{row}");
        }
    }
}
