//! Difficulty tiers and their puzzle profiles

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Puzzle difficulty tier
///
/// Ordered from easiest to hardest. Every harder tier hands out strictly more
/// candidate words, and longer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Difficulty {
    /// 8 words of 4-5 letters (default)
    #[default]
    Easy,
    /// 12 words of 6-7 letters
    Medium,
    /// 16 words of 8-9 letters
    Hard,
    /// 20 words of 10-12 letters
    Expert,
}

/// Word count and word length for one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub word_count: usize,
    pub word_length: RangeInclusive<usize>,
}

/// Error for a difficulty name that is not one of the known tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty '{}' (expected one of: easy, medium, hard, expert)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDifficulty {}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Puzzle profile for this tier
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                word_count: 8,
                word_length: 4..=5,
            },
            Self::Medium => DifficultyProfile {
                word_count: 12,
                word_length: 6..=7,
            },
            Self::Hard => DifficultyProfile {
                word_count: 16,
                word_length: 8..=9,
            },
            Self::Expert => DifficultyProfile {
                word_count: 20,
                word_length: 10..=12,
            },
        }
    }

    /// Tier used for a game level
    ///
    /// Two levels per tier; everything from level 7 up is expert.
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        match level {
            0..=2 => Self::Easy,
            3..=4 => Self::Medium,
            5..=6 => Self::Hard,
            _ => Self::Expert,
        }
    }

    /// Lowercase tier name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    /// Parse a tier name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
