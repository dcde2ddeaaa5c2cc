//! Game progression state
//!
//! Tracks whether a game is running, the score and the current level.

use super::Difficulty;

/// Score awarded for each successful hack
pub const POINTS_PER_HACK: u32 = 100;

/// Game progression state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub is_running: bool,
    pub score: u32,
    pub level: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A stopped game at level 1 with no score
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_running: false,
            score: 0,
            level: 1,
        }
    }

    pub const fn start(&mut self) {
        self.is_running = true;
    }

    pub const fn stop(&mut self) {
        self.is_running = false;
    }

    /// Record a successful hack: advance one level and award points
    pub const fn complete_hack(&mut self) {
        self.level += 1;
        self.score += POINTS_PER_HACK;
    }

    /// Difficulty of the puzzles at the current level
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        Difficulty::for_level(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_defaults() {
        let game = Game::new();
        assert!(!game.is_running);
        assert_eq!(game.score, 0);
        assert_eq!(game.level, 1);
        assert_eq!(Game::default(), game);
    }

    #[test]
    fn start_sets_running() {
        let mut game = Game::new();
        game.start();
        assert!(game.is_running);

        game.stop();
        assert!(!game.is_running);
    }

    #[test]
    fn complete_hack_increments_level_by_one() {
        let mut game = Game::new();
        game.start();
        let initial_level = game.level;

        game.complete_hack();
        assert_eq!(game.level, initial_level + 1);
        assert_eq!(game.score, POINTS_PER_HACK);

        game.complete_hack();
        assert_eq!(game.level, initial_level + 2);
        assert_eq!(game.score, 2 * POINTS_PER_HACK);
    }

    #[test]
    fn difficulty_follows_level() {
        let mut game = Game::new();
        assert_eq!(game.difficulty(), Difficulty::Easy);

        game.complete_hack();
        game.complete_hack();
        assert_eq!(game.level, 3);
        assert_eq!(game.difficulty(), Difficulty::Medium);
    }
}
