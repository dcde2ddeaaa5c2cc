//! Puzzle generation command
//!
//! Generates a single puzzle and collects its words and the requested hints.

use crate::core::{Difficulty, Word};
use crate::puzzle::{HackingPuzzle, PuzzleConfig, PuzzleError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for generating a puzzle
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub difficulty: Difficulty,
    /// Number of hints to draw
    pub hints: usize,
    /// Include the password in the result
    pub reveal: bool,
    pub seed: Option<u64>,
}

/// A generated puzzle ready for display
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    pub difficulty: Difficulty,
    pub words: Vec<String>,
    pub hints: Vec<String>,
    pub password: Option<String>,
}

/// Generate one puzzle from `pool`
///
/// # Errors
///
/// Returns `PuzzleError::InsufficientWordPool` if the pool cannot supply the
/// requested difficulty.
pub fn generate_puzzle(
    config: &GenerateConfig,
    pool: &[Word],
) -> Result<GeneratedPuzzle, PuzzleError> {
    let puzzle_config = PuzzleConfig::new(config.difficulty);
    let mut puzzle = match config.seed {
        Some(seed) => HackingPuzzle::create_with_rng(
            &puzzle_config,
            pool,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => HackingPuzzle::create_with_rng(&puzzle_config, pool, &mut rand::rng())?,
    };

    let hints = (0..config.hints).map(|_| puzzle.get_hint()).collect();

    Ok(GeneratedPuzzle {
        difficulty: puzzle.difficulty(),
        words: puzzle.words().iter().map(|w| w.text().to_string()).collect(),
        hints,
        password: config.reveal.then(|| puzzle.password().text().to_string()),
    })
}
