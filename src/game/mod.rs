//! Game orchestration
//!
//! Glue between the pure core, a word source and a view.

mod controller;
mod error;
pub mod ports;

pub use controller::{GameController, LOSS_MESSAGE_PREFIX, Outcome, WIN_MESSAGE};
pub use error::SourceError;
pub use ports::{LoadingIndicator, MessageBar, Renderer, View, WordSource};
