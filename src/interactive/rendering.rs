//! TUI rendering with ratatui
//!
//! Draws the guess grid, the keyboard hints and the status line.

use super::board::{Board, Tile};
use crate::core::Verdict;
use crate::game::LOSS_MESSAGE_PREFIX;
use crate::output::formatters::share_grid;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, board: &Board) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Guess grid
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Status
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, board, chunks[1]);
    render_keyboard(f, board, chunks[2]);
    render_status(f, board, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Daily Word")
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

const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    }
}

fn tile_span(tile: Tile, invalid: bool) -> Span<'static> {
    let text = format!(" {} ", tile.letter.unwrap_or('·'));
    let style = match tile.verdict {
        Some(verdict) => Style::default()
            .fg(Color::Black)
            .bg(verdict_color(verdict))
            .add_modifier(Modifier::BOLD),
        None if invalid => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        None if tile.letter.is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(text, style)
}

fn render_grid(f: &mut Frame, board: &Board, area: Rect) {
    let mut lines = Vec::new();

    for (row, tiles) in board.rows().iter().enumerate() {
        let invalid = board.invalid_row() == Some(row);
        let mut spans: Vec<Span> = Vec::with_capacity(tiles.len() * 2 + 1);
        for &tile in tiles {
            spans.push(tile_span(tile, invalid));
            spans.push(Span::raw(" "));
        }
        if invalid {
            spans.push(Span::styled(
                "not in word list",
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, board: &Board, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match board.hint(letter) {
                        Some(verdict) => {
                            Style::default().fg(Color::Black).bg(verdict_color(verdict))
                        }
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, board: &Board, area: Rect) {
    let mut lines = Vec::new();

    if board.is_loading() {
        lines.push(Line::styled(
            "⏳ Checking word...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(message) = board.message() {
        let color = if message.starts_with(LOSS_MESSAGE_PREFIX) {
            Color::Red
        } else {
            Color::Green
        };
        lines.push(Line::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(
            share_grid(&board.scored_rows())
                .replace("\n\n", "  ")
                .replace('\n', " "),
        ));
    }

    let help = if board.message().is_some() {
        "Enter/Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    lines.push(Line::styled(help, Style::default().fg(Color::DarkGray)));

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
