//! Terminal output formatting
//!
//! Coloured tiles and share grids for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_round_summary, print_scored_row};
