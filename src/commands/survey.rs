//! Puzzle survey - bulk generation statistics
//!
//! Generates many puzzles per difficulty in parallel and checks that each one is
//! well formed.

use crate::core::{Difficulty, Likeness, Word};
use crate::puzzle::{HackingPuzzle, PuzzleConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Statistics for one difficulty tier
#[derive(Debug, Clone)]
pub struct TierSurvey {
    pub difficulty: Difficulty,
    pub generated: usize,
    pub failed: usize,
    pub words_per_puzzle: usize,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub distinct_passwords: usize,
    /// Mean likeness of decoys against their password
    pub average_decoy_likeness: f64,
    /// Puzzles breaking a structural rule (password missing, duplicate words, leaking hint)
    pub violations: usize,
}

/// Result of a survey across all tiers
#[derive(Debug, Clone)]
pub struct SurveyResult {
    pub tiers: Vec<TierSurvey>,
    pub duration: Duration,
}

/// Facts about one generated puzzle
struct PuzzleSample {
    password: String,
    word_count: usize,
    word_length: usize,
    decoy_likeness_sum: usize,
    decoy_count: usize,
    violation: bool,
}

/// Generate `count` puzzles per difficulty and collect statistics
///
/// Puzzle `i` of each tier is seeded with `i`, so a survey is reproducible.
#[must_use]
pub fn run_survey(pool: &[Word], count: usize) -> SurveyResult {
    let start = Instant::now();

    let pb = ProgressBar::new((count * Difficulty::ALL.len()) as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let tiers = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            pb.set_message(format!("{difficulty}"));
            survey_tier(difficulty, pool, count, &pb)
        })
        .collect();

    pb.finish_with_message("Complete!");

    SurveyResult {
        tiers,
        duration: start.elapsed(),
    }
}

fn survey_tier(
    difficulty: Difficulty,
    pool: &[Word],
    count: usize,
    pb: &ProgressBar,
) -> TierSurvey {
    let config = PuzzleConfig::new(difficulty);

    let samples: Vec<Option<PuzzleSample>> = (0..count as u64)
        .into_par_iter()
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = HackingPuzzle::create_with_rng(&config, pool, &mut rng)
                .ok()
                .map(sample_puzzle);
            pb.inc(1);
            sample
        })
        .collect();

    let ok: Vec<&PuzzleSample> = samples.iter().flatten().collect();
    let distinct: FxHashSet<&str> = ok.iter().map(|s| s.password.as_str()).collect();
    let likeness_sum: usize = ok.iter().map(|s| s.decoy_likeness_sum).sum();
    let decoy_total: usize = ok.iter().map(|s| s.decoy_count).sum();

    TierSurvey {
        difficulty,
        generated: ok.len(),
        failed: samples.len() - ok.len(),
        words_per_puzzle: ok.first().map_or(0, |s| s.word_count),
        min_word_length: ok.iter().map(|s| s.word_length).min().unwrap_or(0),
        max_word_length: ok.iter().map(|s| s.word_length).max().unwrap_or(0),
        distinct_passwords: distinct.len(),
        average_decoy_likeness: if decoy_total == 0 {
            0.0
        } else {
            likeness_sum as f64 / decoy_total as f64
        },
        violations: ok.iter().filter(|s| s.violation).count(),
    }
}

fn sample_puzzle(mut puzzle: HackingPuzzle) -> PuzzleSample {
    let password = puzzle.password().clone();
    let words = puzzle.words().to_vec();

    let unique: FxHashSet<&Word> = words.iter().collect();
    let decoy_likeness_sum = words
        .iter()
        .filter(|&w| *w != password)
        .map(|w| Likeness::calculate(w, &password).matches())
        .sum();

    let first_hint = puzzle.get_hint();
    let violation = !words.contains(&password)
        || unique.len() != words.len()
        || !puzzle.check_password(password.text())
        || first_hint.is_empty()
        || first_hint.contains(password.text());

    PuzzleSample {
        password: password.text().to_string(),
        word_count: words.len(),
        word_length: password.len(),
        decoy_likeness_sum,
        decoy_count: words.len().saturating_sub(1),
        violation,
    }
}
