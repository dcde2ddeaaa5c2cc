//! Puzzle creation errors

use crate::core::{Difficulty, UnknownDifficulty};
use thiserror::Error;

/// Failure modes for puzzle creation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("invalid puzzle config: {0}")]
    InvalidConfig(#[from] UnknownDifficulty),
    #[error(
        "word pool too small for a {difficulty} puzzle: need {required} words of one length, found at most {available}"
    )]
    InsufficientWordPool {
        difficulty: Difficulty,
        required: usize,
        available: usize,
    },
}
