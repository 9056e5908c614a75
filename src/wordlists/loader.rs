//! Word list loading utilities
//!
//! Turns raw word lists (files, embedded constants, API responses) into
//! validated `Word`s.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped, as are entries that are not valid words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    Ok(words_from_slice(&lines))
}

/// Convert a list of strings to validated words
///
/// Invalid entries are dropped and reported once at `warn` level.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    let words: Vec<Word> = slice.iter().filter_map(|s| Word::new(s).ok()).collect();

    let skipped = slice.len() - words.len();
    if skipped > 0 {
        warn!("Skipped {skipped} of {} entries that are not 5-letter words", slice.len());
    }

    words
}
