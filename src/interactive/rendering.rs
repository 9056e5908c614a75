//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{BoardRow, Lifecycle, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board + side panel
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.session() {
        Some(session) if app.reveal => {
            format!("🟩 WORDLE 🟨  (solution: {})", session.solution().text().to_uppercase())
        }
        _ => "🟩 WORDLE 🟨".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colors for a status
fn status_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn board_line(row: &BoardRow) -> Line<'static> {
    let letters: Vec<char> = row.text.chars().collect();
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for i in 0..WORD_LENGTH {
        let status = row.feedback.map(|feedback| feedback.statuses()[i]);
        let tile = letters
            .get(i)
            .map_or_else(|| " · ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
        spans.push(Span::styled(tile, status_style(status)));
        spans.push(Span::raw(" "));
    }

    if row.is_current {
        spans.push(Span::styled("◀", Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content: Vec<Line> = match &app.lifecycle {
        Lifecycle::Playing(session) => session
            .rows()
            .iter()
            .flat_map(|row| [board_line(row), Line::from("")])
            .collect(),
        Lifecycle::Loading => vec![Line::from("Fetching a word...")],
        Lifecycle::Unavailable(e) => vec![
            Line::styled("Cannot start a game", Style::default().fg(Color::Red)),
            Line::from(e.to_string()),
            Line::from(""),
            Line::from("Ctrl+N: try again | Esc: quit"),
        ],
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn keyboard_lines(hints: &FxHashMap<u8, LetterStatus>) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let status = hints.get(&letter).copied();
                    Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase() as char),
                        status_style(status),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session().map(Session::letter_hints).unwrap_or_default();

    let keyboard = Paragraph::new(keyboard_lines(&hints))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state_text = match app.session() {
        _ if app.is_loading() => "Loading...".to_string(),
        Some(session) if session.is_over() => format!("Game over ({:?})", session.status()),
        Some(session) => format!("Guesses left: {}", session.remaining_guesses()),
        None => "Not started".to_string(),
    };
    f.render_widget(Paragraph::new(state_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.games_played,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Enter: Submit | Ctrl+N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::app::tests::{app_with, type_word, wait_for_bootstrap};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn board_line_marks_tiles() {
        let row = BoardRow {
            text: "cr".to_string(),
            feedback: None,
            is_current: true,
        };
        let line = board_line(&row);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with(" C   R   · "));
        assert!(text.ends_with('◀'));
    }

    #[test]
    fn keyboard_uses_hint_colors() {
        let mut hints = FxHashMap::default();
        hints.insert(b'q', LetterStatus::Correct);
        let lines = keyboard_lines(&hints);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].style, status_style(Some(LetterStatus::Correct)));
        assert_eq!(lines[0].spans[1].style, status_style(None));
    }

    #[test]
    fn loading_screen() {
        let app = app_with(&["crane"]);
        assert!(screen(&app).contains("Fetching a word"));
    }

    #[test]
    fn unavailable_screen_offers_retry() {
        let mut app = app_with(&[]);
        app.new_game();
        wait_for_bootstrap(&mut app);
        assert!(screen(&app).contains("Cannot start a game"));
    }

    #[test]
    fn board_shows_guesses() {
        let mut app = app_with(&["crane"]);
        app.new_game();
        wait_for_bootstrap(&mut app);
        type_word(&mut app, "trace");

        let text = screen(&app);
        assert!(text.contains(" T   R   A   C   E "));
        assert!(text.contains("Guesses left: 5"));
        assert!(!text.contains("solution:"));
    }

    #[test]
    fn reveal_shows_solution_in_header() {
        let mut app = app_with(&["crane"]);
        app.reveal = true;
        app.new_game();
        wait_for_bootstrap(&mut app);
        assert!(screen(&app).contains("solution: CRANE"));
    }
}
