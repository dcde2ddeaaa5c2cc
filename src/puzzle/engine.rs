//! Puzzle generation and password checking

use super::{Hint, PuzzleConfig, PuzzleError};
use crate::core::{Difficulty, Likeness, Word};
use crate::wordlists::{WORDS, loader::words_from_slice};
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// One password-guessing challenge
///
/// Holds a fixed list of candidate words of a single length, one of which is the
/// password. Only the hint counter changes after creation.
#[derive(Debug, Clone)]
pub struct HackingPuzzle {
    difficulty: Difficulty,
    words: Vec<Word>,
    password_index: usize,
    hints_revealed: usize,
}

impl HackingPuzzle {
    /// Create a puzzle from the embedded word list using thread-local randomness
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InsufficientWordPool` if the embedded list cannot
    /// supply the tier's word count.
    pub fn create(config: &PuzzleConfig) -> Result<Self, PuzzleError> {
        let pool = words_from_slice(WORDS);
        Self::create_with_rng(config, &pool, &mut rand::rng())
    }

    /// Create a puzzle from `pool` using the given random source
    ///
    /// # Algorithm
    /// 1. Group distinct pool words by length, keeping lengths inside the tier's range
    /// 2. Keep the lengths with at least the tier's word count
    /// 3. Pick one of those lengths, then sample the words and the password uniformly
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InsufficientWordPool` if no length in range has enough
    /// distinct words.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use terminal_hacking::core::Difficulty;
    /// use terminal_hacking::puzzle::{HackingPuzzle, PuzzleConfig};
    /// use terminal_hacking::wordlists::{WORDS, loader::words_from_slice};
    ///
    /// let pool = words_from_slice(WORDS);
    /// let config = PuzzleConfig::new(Difficulty::Medium);
    /// let puzzle = HackingPuzzle::create_with_rng(&config, &pool, &mut StdRng::seed_from_u64(7)).unwrap();
    ///
    /// assert_eq!(puzzle.words().len(), 12);
    /// assert!(puzzle.check_password(puzzle.password().text()));
    /// ```
    pub fn create_with_rng<R: Rng + ?Sized>(
        config: &PuzzleConfig,
        pool: &[Word],
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let difficulty = config.difficulty;
        let profile = difficulty.profile();

        let mut by_length: FxHashMap<usize, Vec<&Word>> = FxHashMap::default();
        for word in pool.iter().filter(|w| profile.word_length.contains(&w.len())) {
            by_length.entry(word.len()).or_default().push(word);
        }

        // Sorted groups make a seeded run independent of pool order
        for group in by_length.values_mut() {
            group.sort_unstable();
            group.dedup();
        }

        let mut usable_lengths: Vec<usize> = by_length
            .iter()
            .filter(|(_, group)| group.len() >= profile.word_count)
            .map(|(&len, _)| len)
            .collect();
        usable_lengths.sort_unstable();

        let Some(&length) = usable_lengths.choose(rng) else {
            let available = by_length.values().map(Vec::len).max().unwrap_or(0);
            warn!(
                "Word pool cannot supply a {difficulty} puzzle ({available}/{} words)",
                profile.word_count
            );
            return Err(PuzzleError::InsufficientWordPool {
                difficulty,
                required: profile.word_count,
                available,
            });
        };

        let words: Vec<Word> = by_length[&length]
            .choose_multiple(rng, profile.word_count)
            .map(|&w| w.clone())
            .collect();
        let password_index = rng.random_range(0..words.len());

        debug!(
            "Created {difficulty} puzzle: {} words of length {length}",
            words.len()
        );

        Ok(Self {
            difficulty,
            words,
            password_index,
            hints_revealed: 0,
        })
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Candidate words in display order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn password(&self) -> &Word {
        &self.words[self.password_index]
    }

    /// Letter count shared by every word in the puzzle
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.password().len()
    }

    /// Number of hints handed out so far
    #[inline]
    #[must_use]
    pub const fn hints_revealed(&self) -> usize {
        self.hints_revealed
    }

    /// Check an entry against the password
    ///
    /// Exact, case-sensitive comparison with no trimming. A mismatch is a normal
    /// outcome, not an error.
    #[must_use]
    pub fn check_password(&self, candidate: &str) -> bool {
        candidate == self.password().text()
    }

    /// Likeness of an entry, or `None` if the entry is not one of the puzzle words
    #[must_use]
    pub fn likeness(&self, candidate: &str) -> Option<Likeness> {
        self.words
            .iter()
            .find(|w| w.text() == candidate)
            .map(|w| Likeness::calculate(w, self.password()))
    }

    /// Hand out the next hint
    pub fn get_hint(&mut self) -> String {
        self.hints_revealed += 1;
        self.hint_at(self.hints_revealed).to_string()
    }

    /// The hint for call number `call` without advancing the counter
    #[must_use]
    pub fn hint_at(&self, call: usize) -> Hint {
        Hint::for_call(call, self.password(), &self.decoys())
    }

    /// Decoys removed by the hints handed out so far
    #[must_use]
    pub fn duds(&self) -> Vec<&Word> {
        let removed = self.hints_revealed.saturating_sub(super::hint::LETTER_HINTS);
        self.decoys().into_iter().take(removed).collect()
    }

    /// True once `word` has been removed as a dud
    #[must_use]
    pub fn is_dud(&self, word: &Word) -> bool {
        self.duds().contains(&word)
    }

    fn decoys(&self) -> Vec<&Word> {
        self.words
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.password_index)
            .map(|(_, w)| w)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn embedded_pool() -> Vec<Word> {
        words_from_slice(WORDS)
    }

    fn puzzle(difficulty: Difficulty, seed: u64) -> HackingPuzzle {
        HackingPuzzle::create_with_rng(
            &PuzzleConfig::new(difficulty),
            &embedded_pool(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    #[test]
    fn create_easy_default() {
        let puzzle = HackingPuzzle::create(&PuzzleConfig::default()).unwrap();
        assert_eq!(puzzle.difficulty(), Difficulty::Easy);
        assert!(!puzzle.words().is_empty());
        assert!(puzzle.words().contains(puzzle.password()));
    }

    #[test]
    fn harder_tiers_have_more_words() {
        for seed in 0..10 {
            let counts: Vec<usize> = Difficulty::ALL
                .iter()
                .map(|&d| puzzle(d, seed).words().len())
                .collect();

            for pair in counts.windows(2) {
                assert!(pair[0] < pair[1], "word counts not increasing: {counts:?}");
            }
        }
    }

    #[test]
    fn words_match_profile() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let puzzle = puzzle(difficulty, 3);

            assert_eq!(puzzle.words().len(), profile.word_count);
            assert!(profile.word_length.contains(&puzzle.word_length()));
            assert!(puzzle.words().iter().all(|w| w.len() == puzzle.word_length()));
        }
    }

    #[test]
    fn words_are_unique() {
        for seed in 0..20 {
            let puzzle = puzzle(Difficulty::Expert, seed);
            let unique: std::collections::HashSet<_> = puzzle.words().iter().collect();
            assert_eq!(unique.len(), puzzle.words().len());
        }
    }

    #[test]
    fn password_is_member_of_words() {
        for seed in 0..50 {
            let puzzle = puzzle(Difficulty::Easy, seed);
            assert!(puzzle.words().contains(puzzle.password()));
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = puzzle(Difficulty::Hard, 42);
        let b = puzzle(Difficulty::Hard, 42);
        assert_eq!(a.words(), b.words());
        assert_eq!(a.password(), b.password());
    }

    #[test]
    fn check_password_accepts_only_exact_match() {
        let puzzle = puzzle(Difficulty::Medium, 1);
        let password = puzzle.password().text().to_string();

        assert!(puzzle.check_password(&password));
        assert!(!puzzle.check_password("wrong_password"));
        assert!(!puzzle.check_password(""));
        assert!(!puzzle.check_password(&password.to_uppercase()));
        assert!(!puzzle.check_password(&format!(" {password}")));
        assert!(!puzzle.check_password(&format!("{password}\n")));

        for word in puzzle.words() {
            if word != puzzle.password() {
                assert!(!puzzle.check_password(word.text()));
            }
        }
    }

    #[test]
    fn check_password_has_no_side_effects() {
        let puzzle = puzzle(Difficulty::Easy, 5);
        let before = puzzle.hints_revealed();
        let _ = puzzle.check_password("nope");
        assert_eq!(puzzle.hints_revealed(), before);
    }

    #[test]
    fn hints_are_non_empty_and_do_not_leak_password() {
        for seed in 0..20 {
            let mut puzzle = puzzle(Difficulty::Easy, seed);
            let first = puzzle.get_hint();
            assert!(!first.is_empty());
            assert_ne!(first, puzzle.password().text());
            assert_eq!(puzzle.hints_revealed(), 1);

            for _ in 0..20 {
                let hint = puzzle.get_hint();
                assert!(!hint.is_empty());
                assert_ne!(hint, puzzle.password().text());
            }
        }
    }

    #[test]
    fn hints_are_deterministic_for_call_count() {
        let mut a = puzzle(Difficulty::Medium, 9);
        let mut b = a.clone();

        for _ in 0..15 {
            assert_eq!(a.get_hint(), b.get_hint());
        }
    }

    #[test]
    fn hints_remove_every_decoy_then_exhaust() {
        let mut puzzle = puzzle(Difficulty::Easy, 11);
        let decoy_count = puzzle.words().len() - 1;

        for _ in 0..(2 + decoy_count) {
            puzzle.get_hint();
        }

        let duds = puzzle.duds();
        assert_eq!(duds.len(), decoy_count);
        assert!(!duds.contains(&puzzle.password()));
        assert_eq!(puzzle.hint_at(puzzle.hints_revealed() + 1), Hint::Exhausted);
    }

    #[test]
    fn duds_follow_hint_count() {
        let mut puzzle = puzzle(Difficulty::Easy, 2);
        puzzle.get_hint();
        puzzle.get_hint();
        assert!(puzzle.duds().is_empty());

        let hint = puzzle.get_hint();
        let duds = puzzle.duds();
        assert_eq!(duds.len(), 1);
        assert!(hint.contains(duds[0].text()));
        assert!(puzzle.is_dud(duds[0]));
    }

    #[test]
    fn likeness_of_password_is_full_length() {
        let puzzle = puzzle(Difficulty::Hard, 4);
        let likeness = puzzle.likeness(puzzle.password().text()).unwrap();
        assert!(likeness.is_perfect());
        assert_eq!(likeness.matches(), puzzle.word_length());
    }

    #[test]
    fn likeness_of_unknown_word_is_none() {
        let puzzle = puzzle(Difficulty::Easy, 4);
        assert!(puzzle.likeness("zzzzzzzzzzzz").is_none());
    }

    #[test]
    fn insufficient_pool_is_an_error() {
        let pool = words_from_slice(&["root", "host", "code"]);
        let result = HackingPuzzle::create_with_rng(
            &PuzzleConfig::new(Difficulty::Easy),
            &pool,
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(
            result.unwrap_err(),
            PuzzleError::InsufficientWordPool {
                difficulty: Difficulty::Easy,
                required: 8,
                available: 3,
            }
        );
    }

    #[test]
    fn duplicate_pool_entries_do_not_count() {
        let pool = words_from_slice(&["root"; 20]);
        let result = HackingPuzzle::create_with_rng(
            &PuzzleConfig::new(Difficulty::Easy),
            &pool,
            &mut StdRng::seed_from_u64(0),
        );

        assert!(matches!(
            result,
            Err(PuzzleError::InsufficientWordPool { available: 1, .. })
        ));
    }

    #[test]
    fn out_of_range_lengths_are_ignored() {
        // Plenty of words, but all too long for easy
        let pool = words_from_slice(&[
            "kernel", "socket", "packet", "daemon", "buffer", "cipher", "client", "cookie",
            "domain",
        ]);
        let result = HackingPuzzle::create_with_rng(
            &PuzzleConfig::new(Difficulty::Easy),
            &pool,
            &mut StdRng::seed_from_u64(0),
        );

        assert!(matches!(
            result,
            Err(PuzzleError::InsufficientWordPool { available: 0, .. })
        ));
    }

    #[test]
    fn minimal_pool_uses_every_word() {
        let texts = ["byte", "code", "data", "disk", "fire", "hack", "host", "link"];
        let pool = words_from_slice(&texts);
        let puzzle = HackingPuzzle::create_with_rng(
            &PuzzleConfig::new(Difficulty::Easy),
            &pool,
            &mut StdRng::seed_from_u64(8),
        )
        .unwrap();

        let mut words: Vec<&str> = puzzle.words().iter().map(Word::text).collect();
        words.sort_unstable();
        assert_eq!(words, texts);
    }
}
