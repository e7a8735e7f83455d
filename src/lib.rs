//! Daily Wordle
//!
//! Guess the daily five-letter word in six tries, in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::core::{Feedback, GameState, Status, Word};
//!
//! let mut state = GameState::new(Word::new("crane").unwrap());
//! for letter in *b"CRANE" {
//!     state.append_letter(letter);
//! }
//!
//! let turn = state.commit_guess().unwrap();
//! assert_eq!(turn.feedback, Feedback::PERFECT);
//! assert_eq!(state.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Controller and its collaborator ports
pub mod game;

// Word service and offline dictionary
pub mod source;

// Embedded word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
