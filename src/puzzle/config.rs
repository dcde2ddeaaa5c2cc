//! Puzzle configuration

use super::PuzzleError;
use crate::core::Difficulty;

/// Configuration for creating a puzzle
///
/// The default is an easy puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub difficulty: Difficulty,
}

impl PuzzleConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Build a config from a difficulty name such as `"hard"`
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidConfig` if the name is not a known difficulty.
    pub fn from_name(name: &str) -> Result<Self, PuzzleError> {
        Ok(Self::new(name.parse()?))
    }
}
