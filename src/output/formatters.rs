//! Formatting utilities for terminal output

use crate::core::{Feedback, NUMBER_OF_ROUNDS, Verdict, Word};
use colored::{ColoredString, Colorize};

/// A letter drawn as a coloured tile
#[must_use]
pub fn colored_tile(letter: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_bright_black(),
    }
}

/// A scored guess drawn as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, &verdict)| colored_tile(letter, verdict).to_string())
        .collect()
}

/// Spoiler-free summary of a round
///
/// The header shows the number of rows used, or `X` if the last row was not
/// a win.
///
/// # Examples
/// ```
/// use daily_wordle::core::Feedback;
/// use daily_wordle::output::formatters::share_grid;
///
/// let rows = ["--Y--".parse().unwrap(), Feedback::PERFECT];
/// assert_eq!(share_grid(&rows), "Wordle 2/6\n\n⬜⬜🟨⬜⬜\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(rows: &[Feedback]) -> String {
    let score = match rows.last() {
        Some(last) if last.is_win() => rows.len().to_string(),
        _ => "X".to_string(),
    };

    let grid: Vec<String> = rows.iter().map(|row| row.to_emoji()).collect();
    format!("Wordle {score}/{NUMBER_OF_ROUNDS}\n\n{}", grid.join("\n"))
}
