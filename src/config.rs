//! Runtime configuration resolved from the command line
//!
//! Also sets up logging, which has to know whether the terminal is being
//! drawn on.

use crate::core::Word;
use crate::wordlists::{
    EmbeddedWordSource, FileWordSource, FixedWordSource, HttpWordSource, WordSource,
};
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Where solutions come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Remote word API
    Api,
    /// Word list compiled into the binary
    Embedded,
    /// Word list file on disk
    File(PathBuf),
}

impl SourceKind {
    /// Parse the `--source` flag: "api", "embedded" (any case) or a file path
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        if flag.eq_ignore_ascii_case("api") {
            Self::Api
        } else if flag.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(flag))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceKind,
    pub api_url: String,
    pub timeout: Duration,
    /// Forced solution, overrides `source`
    pub solution: Option<Word>,
    pub seed: Option<u64>,
    /// Show the solution on the board while playing
    pub reveal: bool,
}

impl Config {
    /// Build the word source this configuration asks for
    #[must_use]
    pub fn word_source(&self) -> Arc<dyn WordSource> {
        if let Some(solution) = &self.solution {
            return Arc::new(FixedWordSource::new(vec![solution.clone()]));
        }

        match &self.source {
            SourceKind::Api => Arc::new(HttpWordSource::new(self.api_url.clone(), self.timeout)),
            SourceKind::Embedded => Arc::new(EmbeddedWordSource),
            SourceKind::File(path) => Arc::new(FileWordSource::new(path.clone())),
        }
    }

    /// Random source for solution picks, seeded if `--seed` was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Initialise the `log` backend
///
/// With a log file, everything goes there. Without one, logs go to stderr
/// unless the terminal is owned by the TUI, in which case logging stays off.
/// `RUST_LOG` sets the filter (default: `warn`).
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if tui => return Ok(()),
        None => {
            builder.target(Target::Stderr);
        }
    }

    // A logger may already be installed (e.g. by tests); keep the first one
    if let Err(e) = builder.try_init() {
        debug!("Keeping the existing logger: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
    use rand::Rng;

    fn config(source: SourceKind) -> Config {
        Config {
            source,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            solution: None,
            seed: None,
            reveal: false,
        }
    }

    #[test]
    fn source_kind_from_flag() {
        assert_eq!(SourceKind::from_flag("api"), SourceKind::Api);
        assert_eq!(SourceKind::from_flag("embedded"), SourceKind::Embedded);
        assert_eq!(
            SourceKind::from_flag("data/words.txt"),
            SourceKind::File(PathBuf::from("data/words.txt"))
        );
    }

    #[test]
    fn source_kind_keywords_ignore_case() {
        assert_eq!(SourceKind::from_flag("API"), SourceKind::Api);
        assert_eq!(SourceKind::from_flag("Embedded"), SourceKind::Embedded);
        assert_eq!(
            SourceKind::from_flag("Api.txt"),
            SourceKind::File(PathBuf::from("Api.txt"))
        );
    }

    #[test]
    fn init_logging_twice_is_not_an_error() {
        let dir = std::env::temp_dir().join(format!("wordle_game_log_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("game.log");

        init_logging(Some(&path), false).unwrap();
        init_logging(Some(&path), false).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn word_source_matches_kind() {
        assert_eq!(config(SourceKind::Api).word_source().describe(), DEFAULT_API_URL);
        assert!(
            config(SourceKind::Embedded)
                .word_source()
                .describe()
                .starts_with("embedded")
        );
        assert_eq!(
            config(SourceKind::File(PathBuf::from("words.txt")))
                .word_source()
                .describe(),
            "words.txt"
        );
    }

    #[test]
    fn forced_solution_overrides_source() {
        let mut cfg = config(SourceKind::Api);
        cfg.solution = Some(Word::new("crane").unwrap());

        let words = cfg.word_source().candidates().unwrap();
        assert_eq!(words, vec![Word::new("crane").unwrap()]);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut cfg = config(SourceKind::Embedded);
        cfg.seed = Some(11);

        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
