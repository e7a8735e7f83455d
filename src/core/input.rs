//! Raw input token classification

/// Token that submits the current row
pub const SUBMIT_TOKEN: &str = "Enter";

/// Token that deletes the last letter
pub const DELETE_TOKEN: &str = "Backspace";

/// A classified input token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Submit,
    Delete,
    /// An uppercase ASCII letter
    Letter(u8),
    Ignored,
}

impl Input {
    /// Classify a raw input token
    ///
    /// Single ASCII letters are accepted in either case and normalised to
    /// uppercase. Every other token except the submit and delete commands is
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Input;
    ///
    /// assert_eq!(Input::classify("Enter"), Input::Submit);
    /// assert_eq!(Input::classify("q"), Input::Letter(b'Q'));
    /// assert_eq!(Input::classify("Shift"), Input::Ignored);
    /// ```
    #[must_use]
    pub fn classify(token: &str) -> Self {
        match token {
            SUBMIT_TOKEN => Self::Submit,
            DELETE_TOKEN => Self::Delete,
            _ => match token.as_bytes() {
                &[ch] if ch.is_ascii_alphabetic() => Self::Letter(ch.to_ascii_uppercase()),
                _ => Self::Ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(Input::classify("Enter"), Input::Submit);
        assert_eq!(Input::classify("Backspace"), Input::Delete);
    }

    #[test]
    fn commands_are_case_sensitive() {
        assert_eq!(Input::classify("enter"), Input::Ignored);
        assert_eq!(Input::classify("BACKSPACE"), Input::Ignored);
    }

    #[test]
    fn letters_normalised_to_uppercase() {
        assert_eq!(Input::classify("a"), Input::Letter(b'A'));
        assert_eq!(Input::classify("Z"), Input::Letter(b'Z'));
        assert_eq!(Input::classify("m"), Input::Letter(b'M'));
    }

    #[test]
    fn everything_else_ignored() {
        for token in ["", "1", " ", "!", "ab", "Shift", "Tab", "é", "ArrowLeft"] {
            assert_eq!(Input::classify(token), Input::Ignored, "token {token:?}");
        }
    }
}
