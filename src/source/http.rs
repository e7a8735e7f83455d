//! Remote word service client
//!
//! Speaks the small JSON API of the word-of-the-day service:
//! `GET /word-of-the-day` returns `{"word": "..."}` and
//! `POST /validate-word` with `{"word": "..."}` returns `{"validWord": bool}`.

use crate::core::Word;
use crate::game::{SourceError, WordSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Public word-of-the-day service
pub const DEFAULT_API_URL: &str = "https://words.dev-apis.com";

#[derive(Debug, Deserialize)]
struct WordOfTheDay {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// HTTP client for the word service
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    /// Base URL without trailing slash
    base_url: String,
    client: reqwest::Client,
}

impl HttpWordSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl Default for HttpWordSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait(?Send)]
impl WordSource for HttpWordSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_daily_word(&self) -> Result<Word, SourceError> {
        let response: WordOfTheDay = self
            .client
            .get(self.endpoint("word-of-the-day"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Received word of the day");
        Ok(Word::new(response.word)?)
    }

    #[instrument(skip_all, fields(guess = %guess))]
    async fn validate(&self, guess: &Word) -> Result<bool, SourceError> {
        let response: ValidateResponse = self
            .client
            .post(self.endpoint("validate-word"))
            .json(&ValidateRequest { word: guess.text() })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(valid = response.valid_word, "Validation answered");
        Ok(response.valid_word)
    }
}
