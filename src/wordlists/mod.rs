//! Word lists for hacking puzzles
//!
//! Provides the embedded word list compiled into the binary, plus loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Word};

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn every_difficulty_has_a_usable_length() {
        // Each tier needs at least one length in range with enough words
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let usable = profile.word_length.clone().any(|len| {
                WORDS.iter().filter(|w| w.len() == len).count() >= profile.word_count
            });
            assert!(usable, "Embedded list cannot supply a {difficulty} puzzle");
        }
    }

    #[test]
    fn every_embedded_word_fits_some_difficulty() {
        for &word in WORDS {
            assert!(
                Difficulty::ALL
                    .iter()
                    .any(|d| d.profile().word_length.contains(&word.len())),
                "Word '{word}' has a length no difficulty uses"
            );
        }
    }
}
