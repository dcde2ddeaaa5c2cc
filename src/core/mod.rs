//! Core domain types for the hacking game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and testable in isolation.

mod difficulty;
mod game;
mod likeness;
mod word;

pub use difficulty::{Difficulty, DifficultyProfile, UnknownDifficulty};
pub use game::{Game, POINTS_PER_HACK};
pub use likeness::Likeness;
pub use word::{MAX_WORD_LEN, Word, WordError};
