//! Guess evaluation and per-letter feedback
//!
//! Feedback holds one verdict per guess position:
//! - Absent (letter not available in the target)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the correct position)

use super::{LetterMultiset, WORD_LENGTH, Word};
use std::fmt;

/// Verdict for a single guess position
///
/// Ordered `Absent < Present < Correct`, so the best verdict seen for a letter
/// is simply the maximum.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code used by the `G/Y/-` notation
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `target`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. Build a fresh letter multiset from the target
    /// 2. First pass: mark exact matches Correct and consume their letter
    /// 3. Second pass: mark remaining positions Present while the multiset
    ///    still holds that letter, Absent otherwise
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("allow").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[
    ///         Verdict::Present,
    ///         Verdict::Correct,
    ///         Verdict::Present,
    ///         Verdict::Absent,
    ///         Verdict::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut available = LetterMultiset::from_word(target);

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                verdicts[i] = Verdict::Correct;
                available.take(g);
            }
        }

        // Second pass: present-but-misplaced, limited by what is left
        for (verdict, &letter) in verdicts.iter_mut().zip(guess.chars()) {
            if *verdict != Verdict::Correct && available.take(letter) {
                *verdict = Verdict::Present;
            }
        }

        Self(verdicts)
    }

    /// The verdicts in guess order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/⬜ for Absent
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut verdicts {
            *slot = match chars.next()? {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(verdicts))
    }
}

impl From<[Verdict; WORD_LENGTH]> for Feedback {
    fn from(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn evaluate(guess: &str, target: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = evaluate("abcde", "fghij");
        assert_eq!(feedback.verdicts(), &[Absent; 5]);
        assert_eq!(feedback.count(Correct), 0);
        assert_eq!(feedback.count(Present), 0);
    }

    #[test]
    fn exact_match_is_perfect() {
        let feedback = evaluate("crane", "crane");
        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_win());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn single_shared_letter() {
        // CRANE and BOXES share only the E, which is misplaced
        let feedback = evaluate("boxes", "crane");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Absent, Absent, Present, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letters_limited_by_target() {
        let feedback = evaluate("llama", "allow");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn correct_position_takes_priority_over_earlier_duplicate() {
        // Target has one E, at the end. The guess's first E must not steal it.
        let feedback = evaluate("eerie", "crane");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_letters_both_present() {
        // SPEED vs ERASE: both Es are misplaced and the target has two
        let feedback = evaluate("speed", "erase");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_mixed() {
        // ROBOT vs FLOOR: first O misplaced, second O in place
        let feedback = evaluate("robot", "floor");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        let guess = Word::new("llama").unwrap();
        let target = Word::new("allow").unwrap();
        let first = Feedback::evaluate(&guess, &target);
        for _ in 0..3 {
            assert_eq!(Feedback::evaluate(&guess, &target), first);
        }
    }

    #[test]
    fn marked_letters_never_exceed_target_counts() {
        let cases = [
            ("llama", "allow"),
            ("speed", "erase"),
            ("aaaaa", "allow"),
            ("geese", "eerie"),
            ("sassy", "asses"),
        ];

        for (guess, target) in cases {
            let g = Word::new(guess).unwrap();
            let t = Word::new(target).unwrap();
            let feedback = Feedback::evaluate(&g, &t);
            let counts = LetterMultiset::from_word(&t);
            let guess_counts = LetterMultiset::from_word(&g);

            for &letter in g.chars() {
                let marked = g
                    .chars()
                    .iter()
                    .zip(feedback.verdicts())
                    .filter(|&(&ch, &v)| ch == letter && v != Absent)
                    .count();
                let in_guess = usize::from(guess_counts.count(letter));
                let in_target = usize::from(counts.count(letter));
                assert!(
                    marked <= in_guess.min(in_target),
                    "{guess} vs {target}: letter {} marked {marked} times",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn parse_valid() {
        let f1 = Feedback::parse("GYG--").unwrap();
        let f2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.verdicts(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none()); // Too long
        assert!(Feedback::parse("GYG").is_none()); // Too short
        assert!(Feedback::parse("GXGGY").is_none()); // Invalid char
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn emoji_and_display() {
        let feedback = evaluate("robot", "floor");
        assert_eq!(feedback.to_emoji(), "🟨🟨⬜🟩⬜");
        assert_eq!(feedback.to_string(), "YY-G-");
    }

    #[test]
    fn verdict_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!([Present, Absent, Correct].iter().max(), Some(&Correct));
    }
}
