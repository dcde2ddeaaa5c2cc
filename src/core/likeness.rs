//! Likeness feedback for wrong password entries
//!
//! Likeness counts the positions where a guess and the password carry the same
//! letter. Only words of equal length are compared; a puzzle always hands out
//! words of one length.

use super::Word;
use std::fmt;

/// Positional letter matches between a guess and the password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Likeness {
    matches: usize,
    length: usize,
}

impl Likeness {
    /// Calculate the likeness of `guess` against `password`
    ///
    /// Letters are compared position by position; surplus letters of a longer
    /// word never match.
    ///
    /// # Examples
    /// ```
    /// use terminal_hacking::core::{Likeness, Word};
    ///
    /// let guess = Word::new("parser").unwrap();
    /// let password = Word::new("packet").unwrap();
    /// let likeness = Likeness::calculate(&guess, &password);
    ///
    /// // P A . . E .
    /// assert_eq!(likeness.matches(), 3);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, password: &Word) -> Self {
        let matches = guess
            .text()
            .bytes()
            .zip(password.text().bytes())
            .filter(|(g, p)| g == p)
            .count();

        Self {
            matches,
            length: password.len(),
        }
    }

    /// Number of matching positions
    #[inline]
    #[must_use]
    pub const fn matches(self) -> usize {
        self.matches
    }

    /// Length of the password this likeness was measured against
    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// True when every position matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.matches == self.length
    }
}

impl fmt::Display for Likeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Likeness={}", self.matches)
    }
}
