//! Hint progression
//!
//! Hints are a pure function of the puzzle and the call number:
//!
//! 1. the first letter of the password
//! 2. the last letter of the password
//! 3. and on: one decoy removed per call, in word-list order
//!
//! Once every decoy has been removed, further calls say so. No hint ever
//! contains the password itself: the message text around each hint avoids
//! every word in the embedded list.

use crate::core::Word;
use std::fmt;

/// Hints handed out before decoy removal starts
pub const LETTER_HINTS: usize = 2;

/// A single piece of information about the password
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    FirstLetter(char),
    LastLetter(char),
    /// A decoy that is not the password
    Dud(Word),
    /// Every decoy has already been removed
    Exhausted,
}

impl Hint {
    /// The hint handed out on call number `call` (1-based)
    ///
    /// `decoys` are the puzzle words other than the password, in display order.
    /// Call 0 is treated as call 1.
    #[must_use]
    pub fn for_call(call: usize, password: &Word, decoys: &[&Word]) -> Self {
        match call {
            0 | 1 => Self::FirstLetter(password.first_letter()),
            2 => Self::LastLetter(password.last_letter()),
            n => decoys
                .get(n - LETTER_HINTS - 1)
                .map_or(Self::Exhausted, |&dud| Self::Dud(dud.clone())),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstLetter(c) => write!(f, "Begins with '{c}'."),
            Self::LastLetter(c) => write!(f, "Ends with '{c}'."),
            Self::Dud(word) => write!(f, "Dud removed: '{word}'."),
            Self::Exhausted => write!(f, "No decoys remain. Trust what is left."),
        }
    }
}
