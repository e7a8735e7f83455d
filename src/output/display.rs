//! Display functions for the line-based front end

use super::formatters::{colored_row, share_grid};
use crate::core::{Feedback, GameState, Status, Verdict, Word};
use colored::Colorize;

/// Print one scored row
pub fn print_scored_row(row: usize, guess: &Word, feedback: &Feedback) {
    println!(
        "  {}  {}",
        (row + 1).to_string().bright_black(),
        colored_row(guess, feedback)
    );
}

/// Print the result of evaluating a single guess
pub fn print_check_result(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_yellow().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}  {}",
        colored_row(guess, feedback),
        feedback.to_emoji()
    );
    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        feedback.count(Verdict::Correct).to_string().green(),
        feedback.count(Verdict::Present).to_string().yellow(),
        feedback.count(Verdict::Absent).to_string().bright_black()
    );
}

/// Banner line for the round summary
///
/// Finished rounds have already announced the result and the target through
/// the message bar, so only an abandoned round gets a line of its own.
fn summary_headline(state: &GameState) -> Option<&'static str> {
    match state.status() {
        Status::Won | Status::Lost => None,
        Status::Accepting => Some("Round abandoned"),
    }
}

/// Print the end-of-round banner and share grid
pub fn print_round_summary(state: &GameState) {
    let rows: Vec<Feedback> = state
        .history()
        .iter()
        .map(|(_, feedback)| *feedback)
        .collect();

    println!("\n{}", "═".repeat(40).bright_cyan());
    if let Some(headline) = summary_headline(state) {
        println!("  {}", headline.bright_black());
    }

    if !rows.is_empty() {
        println!("\n{}\n", share_grid(&rows));
    }
    println!("{}", "═".repeat(40).bright_cyan());
}
