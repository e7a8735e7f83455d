//! Collaborators the controller drives
//!
//! The game core never touches the network or the screen directly. A
//! [`WordSource`] supplies and checks words; a view made of a [`Renderer`], a
//! [`LoadingIndicator`] and a [`MessageBar`] receives every visible change.

use super::SourceError;
use crate::core::{Verdict, Word};
use async_trait::async_trait;

/// Supplies the daily word and decides which guesses are words
#[async_trait(?Send)]
pub trait WordSource {
    /// Fetch the target word for today
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the source is unreachable or returns
    /// something that is not a five-letter word.
    async fn fetch_daily_word(&self) -> Result<Word, SourceError>;

    /// Check whether `guess` is a recognised word
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the source is unreachable.
    async fn validate(&self, guess: &Word) -> Result<bool, SourceError>;
}

/// Board sink
pub trait Renderer {
    /// Show `letter` in a cell, or blank it with `None`
    fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>);

    /// Colour a cell of a scored row
    fn apply_verdict(&mut self, row: usize, col: usize, verdict: Verdict);

    /// Flag the current row as not being a word
    fn mark_invalid(&mut self, row: usize);
}

/// Shown while a word source call is pending
pub trait LoadingIndicator {
    fn set_visible(&mut self, visible: bool);
}

/// End-of-round message line
pub trait MessageBar {
    fn show(&mut self, text: &str);
}

/// Everything the controller renders to
pub trait View: Renderer + LoadingIndicator + MessageBar {}

impl<T: Renderer + LoadingIndicator + MessageBar> View for T {}
