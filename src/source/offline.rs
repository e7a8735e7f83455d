//! Local dictionary word source

use crate::core::Word;
use crate::game::{SourceError, WordSource};
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument};

/// Days since the Unix epoch, used to seed the daily pick
#[must_use]
pub fn today() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() / 86_400)
}

/// Word source backed by an in-memory dictionary
///
/// The daily word is a deterministic pick from the list seeded by the day
/// number, so every run on the same day agrees. Validation is dictionary
/// membership.
#[derive(Debug, Clone)]
pub struct OfflineWordSource {
    words: Vec<Word>,
    dictionary: FxHashSet<Word>,
    target: Option<Word>,
    day: u64,
}

impl OfflineWordSource {
    /// Build a source from a list of words
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyWordList`] if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SourceError> {
        if words.is_empty() {
            return Err(SourceError::EmptyWordList);
        }

        let dictionary = words.iter().cloned().collect();
        Ok(Self {
            words,
            dictionary,
            target: None,
            day: today(),
        })
    }

    /// Source backed by the dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyWordList`] if the embedded list is empty.
    pub fn embedded() -> Result<Self, SourceError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Source backed by a word list file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        Self::new(load_from_file(path)?)
    }

    /// Always use `target` as the daily word
    ///
    /// The target is added to the dictionary so it can be guessed.
    #[must_use]
    pub fn with_target(mut self, target: Word) -> Self {
        self.dictionary.insert(target.clone());
        self.target = Some(target);
        self
    }

    /// Pick the daily word as if it were `day`
    #[must_use]
    pub const fn with_day(mut self, day: u64) -> Self {
        self.day = day;
        self
    }

    /// The word picked for `day`
    ///
    /// Seeded ChaCha8 keeps the pick stable across `rand` releases.
    #[must_use]
    pub fn word_for_day(&self, day: u64) -> &Word {
        let mut rng = ChaCha8Rng::seed_from_u64(day);
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

#[async_trait(?Send)]
impl WordSource for OfflineWordSource {
    #[instrument(skip(self), fields(day = self.day))]
    async fn fetch_daily_word(&self) -> Result<Word, SourceError> {
        let word = match &self.target {
            Some(target) => target.clone(),
            None => self.word_for_day(self.day).clone(),
        };
        debug!(words = self.words.len(), "Picked daily word");
        Ok(word)
    }

    async fn validate(&self, guess: &Word) -> Result<bool, SourceError> {
        Ok(self.dictionary.contains(guess))
    }
}
