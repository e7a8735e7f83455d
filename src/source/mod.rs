//! Word source adapters
//!
//! - [`HttpWordSource`]: the remote word-of-the-day service
//! - [`OfflineWordSource`]: a local dictionary with a date-seeded daily pick

mod http;
mod offline;

pub use http::{DEFAULT_API_URL, HttpWordSource};
pub use offline::{OfflineWordSource, today};

use crate::core::Word;
use crate::game::{SourceError, WordSource};
use async_trait::async_trait;

/// Whichever source the command line selected
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpWordSource),
    Offline(OfflineWordSource),
}

#[async_trait(?Send)]
impl WordSource for ConfiguredSource {
    async fn fetch_daily_word(&self) -> Result<Word, SourceError> {
        match self {
            Self::Http(source) => source.fetch_daily_word().await,
            Self::Offline(source) => source.fetch_daily_word().await,
        }
    }

    async fn validate(&self, guess: &Word) -> Result<bool, SourceError> {
        match self {
            Self::Http(source) => source.validate(guess).await,
            Self::Offline(source) => source.validate(guess).await,
        }
    }
}
