//! Score a single guess without playing a round

use crate::core::{Feedback, Word, WordError};

/// A guess scored against a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns a `WordError` if either argument is not a five-letter word.
///
/// # Examples
/// ```
/// use daily_wordle::commands::check_guess;
///
/// let result = check_guess("boxes", "crane").unwrap();
/// assert_eq!(result.feedback.to_string(), "---Y-");
/// ```
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}
