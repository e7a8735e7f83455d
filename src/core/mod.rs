//! Core domain types for Wordle
//!
//! This module contains the game rules with no I/O: words, letter counts,
//! guess evaluation, input classification and the round state machine.
//! Everything here is pure and testable without a terminal or network.

mod input;
mod multiset;
mod state;
mod verdict;
mod word;

pub use input::{DELETE_TOKEN, Input, SUBMIT_TOKEN};
pub use multiset::LetterMultiset;
pub use state::{Cell, GameState, Status, Turn};
pub use verdict::{Feedback, Verdict};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per round
pub const NUMBER_OF_ROUNDS: usize = 6;
