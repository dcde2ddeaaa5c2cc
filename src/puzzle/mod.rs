//! Hacking puzzle engine
//!
//! Builds password puzzles from a word pool, checks entries and hands out hints.

mod config;
mod engine;
mod error;
pub mod hint;

pub use config::PuzzleConfig;
pub use engine::HackingPuzzle;
pub use error::PuzzleError;
pub use hint::Hint;
