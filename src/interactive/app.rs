//! TUI application state and logic

use super::input::{Command, Input, translate};
use crate::game::{Lifecycle, Session, SessionStatus, Statistics, Transition, start_session};
use crate::wordlists::{SourceError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// How long to wait for a key before checking on the word fetch again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

type Bootstrap = Result<Session, SourceError>;

/// Application state
pub struct App {
    source: Arc<dyn WordSource>,
    rng: StdRng,
    pending: Option<Receiver<Bootstrap>>,
    pub lifecycle: Lifecycle,
    pub stats: Statistics,
    pub messages: Vec<Message>,
    pub reveal: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(source: Arc<dyn WordSource>, rng: StdRng, reveal: bool) -> Self {
        Self {
            source,
            rng,
            pending: None,
            lifecycle: Lifecycle::Loading,
            stats: Statistics::default(),
            messages: Vec::new(),
            reveal,
            should_quit: false,
        }
    }

    /// Fetch a new solution in the background
    ///
    /// The current game, if any, is dropped. Keys are rejected until the
    /// fetch resolves.
    pub fn new_game(&mut self) {
        if self.pending.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let mut rng = StdRng::seed_from_u64(self.rng.random());

        thread::spawn(move || {
            let outcome = start_session(source.as_ref(), &mut rng);
            // The receiver is gone if the app quit meanwhile
            let _ = tx.send(outcome);
        });

        self.pending = Some(rx);
        self.lifecycle = Lifecycle::Loading;
        self.add_message(
            &format!("Fetching a word from {}...", self.source.describe()),
            MessageStyle::Info,
        );
    }

    /// Pick up the background fetch result, if it has arrived
    ///
    /// Returns `true` when the lifecycle changed.
    pub fn poll_bootstrap(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                warn!("Word fetch thread ended without a result");
                Err(SourceError::NoUsableWord)
            }
        };

        self.pending = None;
        self.finish_bootstrap(outcome);
        true
    }

    fn finish_bootstrap(&mut self, outcome: Bootstrap) {
        match &outcome {
            Ok(_) => self.add_message(
                "Guess the word! Type letters, Enter to submit.",
                MessageStyle::Info,
            ),
            Err(e) => {
                self.add_message(&format!("Cannot start: {e}"), MessageStyle::Error);
                self.add_message("Press Ctrl+N to try again.", MessageStyle::Info);
            }
        }
        self.lifecycle.resolve(outcome);
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.lifecycle.session()
    }

    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Command(Command::Quit) => self.should_quit = true,
            Input::Command(Command::NewGame) => self.new_game(),
            Input::Game(action) => match self.lifecycle.apply(action) {
                Ok(Transition::Scored { status, .. }) if status.is_over() => self.game_over(),
                Ok(_) => {}
                Err(rejection) => debug!("Ignored {action:?}: {rejection}"),
            },
        }
    }

    fn game_over(&mut self) {
        let Some(session) = self.lifecycle.session() else {
            return;
        };

        let guesses = session.history().len();
        let solution = session.solution().text().to_uppercase();
        let status = session.status();
        self.stats.record(session);
        info!("Game finished: {status:?} after {guesses} guesses");

        match status {
            SessionStatus::Won => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            SessionStatus::Lost => {
                self.add_message(&format!("Out of guesses! The word was {solution}."), MessageStyle::Error);
            }
            SessionStatus::InProgress => {}
        }
        self.add_message("Press Ctrl+N for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        app.poll_bootstrap();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && let Some(input) = translate(&key)
        {
            app.handle_input(input);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::{MAX_GUESSES, Word};
    use crate::game::Action;
    use crate::wordlists::FixedWordSource;

    pub(crate) fn app_with(words: &[&str]) -> App {
        let words = words.iter().map(|w| Word::new(w).unwrap()).collect();
        App::new(
            Arc::new(FixedWordSource::new(words)),
            StdRng::seed_from_u64(5),
            false,
        )
    }

    pub(crate) fn wait_for_bootstrap(app: &mut App) {
        for _ in 0..500 {
            if app.poll_bootstrap() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("word fetch did not finish");
    }

    pub(crate) fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_input(Input::Game(Action::AppendLetter(c)));
        }
        app.handle_input(Input::Game(Action::SubmitGuess));
    }

    #[test]
    fn keys_before_solution_are_ignored() {
        let mut app = app_with(&["crane"]);
        app.handle_input(Input::Game(Action::AppendLetter('a')));
        assert!(app.session().is_none());
        assert!(matches!(app.lifecycle, Lifecycle::Loading));
    }

    #[test]
    fn new_game_starts_session_in_background() {
        let mut app = app_with(&["crane"]);
        app.new_game();
        assert!(app.is_loading());

        wait_for_bootstrap(&mut app);
        assert!(!app.is_loading());
        assert_eq!(app.session().map(|s| s.solution().text()), Some("crane"));
    }

    #[test]
    fn failed_fetch_can_be_retried() {
        let mut app = app_with(&[]);
        app.new_game();
        wait_for_bootstrap(&mut app);

        assert!(matches!(app.lifecycle, Lifecycle::Unavailable(_)));
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Error));

        app.handle_input(Input::Command(Command::NewGame));
        assert!(app.is_loading());
        wait_for_bootstrap(&mut app);
        assert!(matches!(app.lifecycle, Lifecycle::Unavailable(_)));
    }

    #[test]
    fn winning_records_statistics() {
        let mut app = app_with(&["crane"]);
        app.new_game();
        wait_for_bootstrap(&mut app);

        type_word(&mut app, "trace");
        type_word(&mut app, "crane");

        assert_eq!(app.session().map(Session::status), Some(SessionStatus::Won));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        // Frozen: further keys change nothing and record nothing
        type_word(&mut app, "slate");
        assert_eq!(app.session().map(|s| s.history().len()), Some(2));
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn losing_reveals_solution() {
        let mut app = app_with(&["crane"]);
        app.new_game();
        wait_for_bootstrap(&mut app);

        for _ in 0..MAX_GUESSES {
            type_word(&mut app, "slate");
        }

        assert_eq!(app.session().map(Session::status), Some(SessionStatus::Lost));
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
        assert_eq!(app.stats.current_streak, 0);
    }

    #[test]
    fn quit_command_sets_flag() {
        let mut app = app_with(&["crane"]);
        app.handle_input(Input::Command(Command::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app_with(&["crane"]);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
