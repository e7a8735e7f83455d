//! Word source error types

use crate::core::WordError;
use derive_more::{Display, Error, From};

/// Failure talking to a word source
///
/// All variants are fatal for the round: the game has no recovery beyond
/// reporting them. A guess that is simply not a word is not an error.
#[derive(Debug, Display, Error, From)]
pub enum SourceError {
    /// The word service could not be reached or answered with an error status
    #[display("word service unreachable: {_0}")]
    Network(reqwest::Error),

    /// The source produced something that is not a five-letter word
    #[display("word source returned a malformed word: {_0}")]
    MalformedWord(WordError),

    /// A word list file could not be read
    #[display("failed to read word list: {_0}")]
    WordList(std::io::Error),

    /// The word list has no usable words
    #[from(ignore)]
    #[display("word list contains no valid five-letter words")]
    EmptyWordList,
}
