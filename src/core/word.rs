//! Candidate word representation
//!
//! A Word is a short lowercase ASCII token that can appear on a hacking terminal.

use std::fmt;

/// Longest word accepted into a puzzle pool
pub const MAX_WORD_LEN: usize = 16;

/// A validated candidate word
///
/// Stores the lowercase text; equality is exact on that text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::TooLong(len) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Length exceeds [`MAX_WORD_LEN`]
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use terminal_hacking::core::Word;
    ///
    /// let word = Word::new("Kernel").unwrap();
    /// assert_eq!(word.text(), "kernel");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r00t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // ASCII only from here, so byte length == char count
        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text.len()));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        char::from(self.text.as_bytes()[0])
    }

    /// Last letter of the word
    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> char {
        char::from(self.text.as_bytes()[self.text.len() - 1])
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
