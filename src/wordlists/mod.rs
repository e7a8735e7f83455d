//! Word lists for offline play
//!
//! Provides the embedded dictionary compiled into the binary and helpers to
//! load custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
