//! Display functions for line-mode results

use super::formatters::{create_progress_bar, pending_row, tile_row};
use crate::core::{Feedback, MAX_GUESSES, Word};
use crate::game::{Session, SessionStatus, Statistics};
use colored::Colorize;

/// Print the result of scoring one guess against one solution
pub fn print_score_result(guess: &Word, solution: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().to_uppercase().bright_yellow().bold(),
        solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", tile_row(guess.text(), feedback));
    println!("  {feedback}");
    println!(
        "\n  Correct: {}  Present: {}",
        feedback.count_correct().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}

/// Print the board so far: scored rows, then the row being typed
pub fn print_board(session: &Session) {
    println!();
    for (i, scored) in session.history().iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            tile_row(scored.guess().text(), scored.feedback())
        );
    }
    if !session.is_over() {
        println!(
            "  {}. {}",
            (session.history().len() + 1).to_string().bright_black(),
            pending_row(session.input()).bright_black()
        );
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &Session) {
    let guesses = session.history().len();
    println!("{}", "═".repeat(50).bright_cyan());
    match session.status() {
        SessionStatus::Won => {
            println!(
                "{}",
                format!("  🎉 Solved in {guesses}/{MAX_GUESSES}!").bright_green().bold()
            );
        }
        SessionStatus::Lost => {
            println!(
                "{} {}",
                "  ❌ Out of guesses. The word was".red().bold(),
                session.solution().text().to_uppercase().bright_yellow().bold()
            );
        }
        SessionStatus::InProgress => {}
    }
    let emoji: Vec<String> = session
        .history()
        .iter()
        .map(|scored| format!("  {}", scored.feedback()))
        .collect();
    println!("\n{}", emoji.join("\n"));
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print statistics for the games played so far
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:         {}", stats.games_played);
    println!("   Win rate:       {:.0}%", stats.win_rate());
    println!("   Current streak: {}", stats.current_streak);
    println!("   Best streak:    {}", stats.best_streak);

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
