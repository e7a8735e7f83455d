//! TUI application loop and terminal-backed view

use super::board::Board;
use super::rendering::ui;
use crate::core::{DELETE_TOKEN, SUBMIT_TOKEN, Verdict};
use crate::game::{GameController, LoadingIndicator, MessageBar, Outcome, Renderer, WordSource};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};

/// View that keeps a [`Board`] and owns the terminal it is drawn on
///
/// Showing the loading indicator redraws immediately, since the next thing
/// the controller does is wait on the word source.
pub struct TuiView<B: Backend> {
    board: Board,
    terminal: Terminal<B>,
}

impl<B: Backend> TuiView<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            board: Board::new(),
            terminal,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Draw the current board
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn draw(&mut self) -> io::Result<()> {
        self.terminal.draw(|f| ui(f, &self.board))?;
        Ok(())
    }
}

impl<B: Backend> Renderer for TuiView<B> {
    fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.board.set_letter(row, col, letter);
    }

    fn apply_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
        self.board.apply_verdict(row, col, verdict);
    }

    fn mark_invalid(&mut self, row: usize) {
        self.board.mark_invalid(row);
    }
}

impl<B: Backend> LoadingIndicator for TuiView<B> {
    fn set_visible(&mut self, visible: bool) {
        self.board.set_visible(visible);
        if visible && let Err(err) = self.draw() {
            warn!(error = %err, "Failed to draw loading indicator");
        }
    }
}

impl<B: Backend> MessageBar for TuiView<B> {
    fn show(&mut self, text: &str) {
        self.board.show(text);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the word source fails.
pub async fn run_tui<S: WordSource>(source: S) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    info!("Starting TUI");
    let res = run_app(terminal, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;

    res
}

async fn run_app<B: Backend, S: WordSource>(terminal: Terminal<B>, source: S) -> Result<()> {
    let mut view = TuiView::new(terminal);
    view.draw()?;

    let mut controller = GameController::start(source, view).await?;
    discard_pending_input()?;

    loop {
        controller.view_mut().draw()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Enter | KeyCode::Char('q') if controller.state().is_done() => break,
            code => {
                let Some(token) = key_token(code) else {
                    continue;
                };
                let outcome = controller.dispatch(&token).await?;
                if waited_on_source(&outcome) {
                    discard_pending_input()?;
                }
            }
        }
    }

    info!(status = ?controller.state().status(), "Leaving TUI");
    Ok(())
}

/// Raw input token for a key, if the key can mean anything to the game
fn key_token(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some(SUBMIT_TOKEN.to_string()),
        KeyCode::Backspace => Some(DELETE_TOKEN.to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

/// True if handling the input involved a word source round-trip
const fn waited_on_source(outcome: &Outcome) -> bool {
    matches!(outcome, Outcome::InvalidWord | Outcome::Scored(_))
}

/// Drop key presses that arrived while a guess was being checked
fn discard_pending_input() -> io::Result<()> {
    let mut dropped = 0;
    while event::poll(Duration::ZERO)? {
        event::read()?;
        dropped += 1;
    }
    if dropped > 0 {
        debug!(dropped, "Discarded input received while busy");
    }
    Ok(())
}
