//! Board model behind the TUI
//!
//! Plain data updated through the view ports; rendering reads it back.

use crate::core::{Feedback, NUMBER_OF_ROUNDS, Verdict, WORD_LENGTH};
use crate::game::{LoadingIndicator, MessageBar, Renderer};
use rustc_hash::FxHashMap;

/// One letter cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
}

/// Everything the TUI shows
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: [[Tile; WORD_LENGTH]; NUMBER_OF_ROUNDS],
    /// Best verdict seen per letter
    keyboard: FxHashMap<char, Verdict>,
    invalid_row: Option<usize>,
    loading: bool,
    message: Option<String>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[[Tile; WORD_LENGTH]; NUMBER_OF_ROUNDS] {
        &self.tiles
    }

    /// Best verdict the player has seen for `letter`
    #[must_use]
    pub fn hint(&self, letter: char) -> Option<Verdict> {
        self.keyboard.get(&letter).copied()
    }

    #[must_use]
    pub const fn invalid_row(&self) -> Option<usize> {
        self.invalid_row
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Feedback of every fully scored row, top to bottom
    #[must_use]
    pub fn scored_rows(&self) -> Vec<Feedback> {
        self.tiles
            .iter()
            .filter_map(|row| {
                let mut verdicts = [Verdict::Absent; WORD_LENGTH];
                for (slot, tile) in verdicts.iter_mut().zip(row) {
                    *slot = tile.verdict?;
                }
                Some(Feedback::from(verdicts))
            })
            .collect()
    }
}

impl Renderer for Board {
    fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.tiles[row][col].letter = letter;
        if self.invalid_row == Some(row) {
            self.invalid_row = None;
        }
    }

    fn apply_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
        let tile = &mut self.tiles[row][col];
        tile.verdict = Some(verdict);

        if let Some(letter) = tile.letter {
            let best = self.keyboard.entry(letter).or_insert(verdict);
            *best = (*best).max(verdict);
        }
    }

    fn mark_invalid(&mut self, row: usize) {
        self.invalid_row = Some(row);
    }
}

impl LoadingIndicator for Board {
    fn set_visible(&mut self, visible: bool) {
        self.loading = visible;
    }
}

impl MessageBar for Board {
    fn show(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }
}
