//! Round state machine
//!
//! Owns the target word, the current row, the in-progress guess buffer and the
//! round status. All mutation happens through the operations below; once the
//! round is Won or Lost every operation is a no-op.

use super::{Feedback, NUMBER_OF_ROUNDS, WORD_LENGTH, Word};

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Accepting,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Accepting)
    }
}

/// A board cell whose letter changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// `None` when the cell was cleared
    pub letter: Option<char>,
}

/// The outcome of a committed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Row the guess occupied
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// Status after the guess
    pub status: Status,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    row: usize,
    buffer: String,
    status: Status,
    history: Vec<(Word, Feedback)>,
}

impl GameState {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            row: 0,
            buffer: String::with_capacity(WORD_LENGTH),
            status: Status::Accepting,
            history: Vec::with_capacity(NUMBER_OF_ROUNDS),
        }
    }

    /// Add a letter to the current row
    ///
    /// A full row keeps its length and has its last letter replaced.
    /// Returns the cell that changed, or `None` if the round is over or
    /// `letter` is not an uppercase ASCII letter.
    pub fn append_letter(&mut self, letter: u8) -> Option<Cell> {
        if self.is_done() || !letter.is_ascii_uppercase() {
            return None;
        }

        if self.buffer.len() == WORD_LENGTH {
            self.buffer.pop();
        }
        self.buffer.push(char::from(letter));

        Some(Cell {
            row: self.row,
            col: self.buffer.len() - 1,
            letter: Some(char::from(letter)),
        })
    }

    /// Remove the last letter of the current row
    ///
    /// Returns the cleared cell, or `None` if there was nothing to delete.
    pub fn delete_letter(&mut self) -> Option<Cell> {
        if self.is_done() {
            return None;
        }

        self.buffer.pop()?;

        Some(Cell {
            row: self.row,
            col: self.buffer.len(),
            letter: None,
        })
    }

    /// The guess that would be submitted right now
    ///
    /// `None` unless the round is accepting and the row holds exactly five
    /// letters; anything else is not a submission.
    #[must_use]
    pub fn pending_guess(&self) -> Option<Word> {
        if self.is_done() || self.buffer.len() != WORD_LENGTH {
            return None;
        }
        Word::new(self.buffer.as_str()).ok()
    }

    /// Commit the pending guess once it has been accepted as a word
    ///
    /// Evaluates the guess, advances the row, then checks for a win before
    /// checking for exhausted rounds. The buffer is cleared only when the round
    /// continues.
    pub fn commit_guess(&mut self) -> Option<Turn> {
        let guess = self.pending_guess()?;
        let feedback = Feedback::evaluate(&guess, &self.target);
        let row = self.row;

        self.history.push((guess.clone(), feedback));
        self.row += 1;

        if guess == self.target {
            self.status = Status::Won;
        } else if self.row == NUMBER_OF_ROUNDS {
            self.status = Status::Lost;
        } else {
            self.buffer.clear();
        }

        Some(Turn {
            row,
            guess,
            feedback,
            status: self.status,
        })
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Submitted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }
}
