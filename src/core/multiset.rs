//! Letter frequency counts for duplicate-letter arbitration
//!
//! A multiset is built fresh from the target word for every evaluation and is
//! consumed while that evaluation hands out Correct and Present verdicts.

use super::Word;
use rustc_hash::FxHashMap;

/// Remaining usable count of each letter of a target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: FxHashMap<u8, u8>,
}

impl LetterMultiset {
    /// Count every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{LetterMultiset, Word};
    ///
    /// let counts = LetterMultiset::from_word(&Word::new("allow").unwrap());
    /// assert_eq!(counts.count(b'L'), 2);
    /// assert_eq!(counts.count(b'Z'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut counts = FxHashMap::default();
        for &ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remaining count for `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` and leaves the counts untouched if none remain.
    pub fn take(&mut self, letter: u8) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
