//! Interactive TUI interface

mod app;
pub mod board;
mod rendering;

pub use app::{TuiView, run_tui};
pub use board::{Board, Tile};
