//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line, scored rows printed as
//! coloured tiles.

use crate::core::{DELETE_TOKEN, NUMBER_OF_ROUNDS, SUBMIT_TOKEN, Verdict, WORD_LENGTH, Word};
use crate::game::{GameController, LoadingIndicator, MessageBar, Outcome, Renderer, WordSource};
use crate::output::{print_round_summary, print_scored_row};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

/// Line-oriented view
///
/// Letters are collected silently; a row is printed once its last verdict
/// arrives.
#[derive(Default)]
pub struct CliView {
    letters: [[Option<char>; WORD_LENGTH]; NUMBER_OF_ROUNDS],
    verdicts: [Verdict; WORD_LENGTH],
    spinner: Option<ProgressBar>,
}

impl CliView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn row_word(&self, row: usize) -> Option<Word> {
        let text: String = self.letters[row].iter().flatten().collect();
        Word::new(text).ok()
    }
}

impl Renderer for CliView {
    fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.letters[row][col] = letter;
    }

    fn apply_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
        self.verdicts[col] = verdict;
        if col + 1 == WORD_LENGTH
            && let Some(guess) = self.row_word(row)
        {
            print_scored_row(row, &guess, &self.verdicts.into());
        }
    }

    fn mark_invalid(&mut self, _row: usize) {
        println!("  {}", "✗ Not in word list".red());
    }
}

impl LoadingIndicator for CliView {
    fn set_visible(&mut self, visible: bool) {
        if visible {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Checking...");
            spinner.enable_steady_tick(Duration::from_millis(80));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl MessageBar for CliView {
    fn show(&mut self, text: &str) {
        println!("\n  {}", text.bold());
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word source fails or there is an I/O error reading
/// user input.
pub async fn run_simple<S: WordSource>(source: S) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {NUMBER_OF_ROUNDS} tries.");
    println!(
        "  {} right letter, right spot   {} right letter, wrong spot",
        " G ".black().on_green(),
        " Y ".black().on_yellow()
    );
    println!("Type 'quit' to give up.\n");

    let mut controller = GameController::start(source, CliView::new()).await?;

    while !controller.state().is_done() {
        let row = controller.state().row();
        let input = get_user_input(&format!("Guess {}/{NUMBER_OF_ROUNDS}", row + 1))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            _ => {}
        }

        if input.chars().count() > WORD_LENGTH {
            println!("  Enter exactly {WORD_LENGTH} letters\n");
            continue;
        }

        // Replace whatever the previous attempt left in the row
        while !controller.state().buffer().is_empty() {
            controller.dispatch(DELETE_TOKEN).await?;
        }
        for ch in input.chars() {
            controller.dispatch(ch.encode_utf8(&mut [0; 4])).await?;
        }

        match controller.dispatch(SUBMIT_TOKEN).await? {
            Outcome::Rejected => println!("  Enter exactly {WORD_LENGTH} letters\n"),
            outcome => debug!(?outcome, "Row submitted"),
        }
    }

    print_round_summary(controller.state());
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }

    Ok(input.trim().to_string())
}
