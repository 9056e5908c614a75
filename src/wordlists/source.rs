//! Solution word sources
//!
//! A `WordSource` produces the candidate list a solution is drawn from. The
//! remote API is the default; the embedded list and word files work offline.

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Public API returning a JSON array of random 5-letter words
pub const DEFAULT_API_URL: &str = "https://random-word-api.herokuapp.com/word?length=5";

/// Default timeout for the word request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why no solution could be obtained
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("word request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("could not read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word source returned no usable 5-letter words")]
    NoUsableWord,
}

/// Provider of candidate solution words
pub trait WordSource: Send + Sync {
    /// Short human-readable description for logs and status lines
    fn describe(&self) -> String;

    /// Fetch the candidate words
    ///
    /// Entries that are not valid words are dropped; the result may be empty.
    ///
    /// # Errors
    /// Returns `SourceError` if the underlying provider fails.
    fn candidates(&self) -> Result<Vec<Word>, SourceError>;
}

/// Remote word API queried over HTTP
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    url: String,
    timeout: Duration,
}

impl HttpWordSource {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl Default for HttpWordSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }
}

impl WordSource for HttpWordSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn candidates(&self) -> Result<Vec<Word>, SourceError> {
        let request_error = |reason: String| SourceError::Request {
            url: self.url.clone(),
            reason,
        };

        info!("Requesting words from {}", self.url);
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let raw: Vec<String> = agent
            .get(&self.url)
            .call()
            .map_err(|e| request_error(e.to_string()))?
            .into_json()
            .map_err(|e| request_error(format!("unexpected response body: {e}")))?;

        debug!("Word API returned {} entries", raw.len());
        Ok(words_from_slice(&raw))
    }
}

/// Word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn describe(&self) -> String {
        format!("embedded list ({} words)", WORDS.len())
    }

    fn candidates(&self) -> Result<Vec<Word>, SourceError> {
        Ok(words_from_slice(WORDS))
    }
}

/// Newline-separated word file
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn candidates(&self) -> Result<Vec<Word>, SourceError> {
        load_from_file(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Caller-supplied words, e.g. a solution forced on the command line
#[derive(Debug, Clone, Default)]
pub struct FixedWordSource {
    words: Vec<Word>,
}

impl FixedWordSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl WordSource for FixedWordSource {
    fn describe(&self) -> String {
        format!("{} fixed word(s)", self.words.len())
    }

    fn candidates(&self) -> Result<Vec<Word>, SourceError> {
        Ok(self.words.clone())
    }
}
