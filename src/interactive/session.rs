//! Interactive hacking session
//!
//! Reads player commands line by line and drives the game and puzzle engine.

use super::{Command, HELP_ENTRIES, Terminal};
use crate::core::{Difficulty, Game, Word};
use crate::output::formatters::{attempts_blocks, format_word_grid};
use crate::puzzle::{HackingPuzzle, PuzzleConfig};
use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Entry attempts per puzzle before the terminal locks
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// Upper bound on entry attempts per puzzle
pub const MAX_ATTEMPTS: u32 = 10;

/// Target name used when `hack` is given no argument
pub const DEFAULT_TARGET: &str = "10.10.10.10";

/// Configuration for an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed puzzle difficulty; `None` follows the game level
    pub difficulty: Option<Difficulty>,
    /// Clamped to `1..=MAX_ATTEMPTS` when the session is created
    pub max_attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The puzzle for the target currently connected to
struct ActiveHack {
    target: String,
    puzzle: HackingPuzzle,
    attempts_left: u32,
}

/// An interactive game session
///
/// Generic over the output sink and random source so whole sessions can be
/// replayed in tests.
pub struct Session<'a, W: Write, R: Rng> {
    config: SessionConfig,
    pool: &'a [Word],
    rng: R,
    terminal: Terminal<W>,
    game: Game,
    active: Option<ActiveHack>,
}

impl<'a, W: Write, R: Rng> Session<'a, W, R> {
    pub fn new(config: SessionConfig, pool: &'a [Word], rng: R, output: W) -> Self {
        let config = SessionConfig {
            max_attempts: config.max_attempts.clamp(1, MAX_ATTEMPTS),
            ..config
        };
        Self {
            config,
            pool,
            rng,
            terminal: Terminal::new(output),
            game: Game::new(),
            active: None,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The puzzle in progress, if connected to a target
    #[must_use]
    pub fn active_puzzle(&self) -> Option<&HackingPuzzle> {
        self.active.as_ref().map(|hack| &hack.puzzle)
    }

    #[must_use]
    pub fn attempts_left(&self) -> Option<u32> {
        self.active.as_ref().map(|hack| hack.attempts_left)
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<W> {
        &self.terminal
    }

    /// Consume the session, returning the output sink
    pub fn into_output(self) -> W {
        self.terminal.into_inner()
    }

    /// Run the session until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<I: BufRead>(&mut self, mut input: I) -> Result<()> {
        self.terminal.display_welcome_message()?;
        self.game.start();

        let mut line = String::new();
        loop {
            self.terminal.prompt()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if self.handle_line(line.trim_end_matches(['\r', '\n']))? == Flow::Quit {
                break;
            }
        }

        self.game.stop();
        Ok(())
    }

    /// Process one line of player input
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let parsed = self.terminal.parse_command(line);

        match Command::from(&parsed) {
            Command::Empty => {}
            Command::Help => self.show_help()?,
            Command::Hack { target } => {
                self.start_hack(target.unwrap_or_else(|| DEFAULT_TARGET.to_string()))?;
            }
            Command::Abort => self.abort()?,
            Command::Words => self.show_words()?,
            Command::Hint => self.give_hint()?,
            Command::Guess(word) => self.guess(&word)?,
            Command::Status => self.show_status()?,
            Command::Clear => self.terminal.clear()?,
            Command::Quit => {
                self.terminal.print_line("Connection closed. Goodbye.")?;
                return Ok(Flow::Quit);
            }
            Command::Usage(usage) => {
                self.terminal.print_line(format!("Usage: {usage}").yellow())?;
            }
            Command::Unknown(name) => {
                self.terminal.print_line(
                    format!("Unknown command: '{name}'. Type 'help' for a list of commands.")
                        .red(),
                )?;
            }
        }

        Ok(Flow::Continue)
    }

    fn show_help(&mut self) -> io::Result<()> {
        self.terminal.print_line("Available commands:".bright_cyan().bold())?;
        for (usage, description) in HELP_ENTRIES {
            self.terminal.print_line(format!("  {usage:<15} {description}"))?;
        }
        Ok(())
    }

    fn start_hack(&mut self, target: String) -> io::Result<()> {
        if let Some(hack) = &self.active {
            let message = format!(
                "Already connected to {}. Finish the puzzle or 'abort' first.",
                hack.target
            );
            return self.terminal.print_line(message.yellow());
        }

        let difficulty = self.config.difficulty.unwrap_or(self.game.difficulty());
        let config = PuzzleConfig::new(difficulty);

        let puzzle = match HackingPuzzle::create_with_rng(&config, self.pool, &mut self.rng) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                return self
                    .terminal
                    .print_line(format!("Hack failed: {err}").red());
            }
        };

        self.terminal
            .print_line(format!("Connecting to {target}...").bright_green())?;
        self.terminal.print_line(format!(
            "Security level: {difficulty}. {} candidate passwords of {} letters.",
            puzzle.words().len(),
            puzzle.word_length()
        ))?;

        self.active = Some(ActiveHack {
            target,
            puzzle,
            attempts_left: self.config.max_attempts,
        });

        self.show_words()
    }

    fn abort(&mut self) -> io::Result<()> {
        match self.active.take() {
            Some(hack) => self
                .terminal
                .print_line(format!("Disconnected from {}.", hack.target)),
            None => self.terminal.print_line("Not connected to any target."),
        }
    }

    fn show_words(&mut self) -> io::Result<()> {
        let Some(hack) = &self.active else {
            return self
                .terminal
                .print_line("Not connected. Use 'hack <target>' first.".yellow());
        };

        let puzzle = &hack.puzzle;
        let rows = format_word_grid(puzzle.words(), |w| puzzle.is_dud(w));
        let attempts = format!(
            "Attempts left: {}",
            attempts_blocks(hack.attempts_left, self.config.max_attempts)
        );

        for row in rows {
            self.terminal.print_line(format!("  {row}"))?;
        }
        self.terminal.print_line(attempts)
    }

    fn give_hint(&mut self) -> io::Result<()> {
        let Some(hack) = &mut self.active else {
            return self
                .terminal
                .print_line("No puzzle in progress. Nothing to hint at.".yellow());
        };

        let hint = hack.puzzle.get_hint();
        self.terminal.print_line(format!("Hint: {hint}").cyan())
    }

    fn guess(&mut self, entry: &str) -> io::Result<()> {
        let Some(hack) = &mut self.active else {
            return self
                .terminal
                .print_line("Not connected. Use 'hack <target>' first.".yellow());
        };

        if hack.puzzle.check_password(entry) {
            let target = hack.target.clone();
            self.active = None;
            self.game.complete_hack();
            info!("Hacked {target}, now at level {}", self.game.level);

            self.terminal
                .print_line(format!("Access granted. {target} is yours.").bright_green().bold())?;
            return self.terminal.print_line(format!(
                "Level {} | Score {}",
                self.game.level, self.game.score
            ));
        }

        hack.attempts_left = hack.attempts_left.saturating_sub(1);
        let feedback = match hack.puzzle.likeness(entry) {
            Some(likeness) => format!("Entry denied. {likeness}"),
            None => format!("Entry denied. '{entry}' is not a valid entry."),
        };
        let attempts_left = hack.attempts_left;

        self.terminal.print_line(feedback.red())?;

        if attempts_left == 0 {
            let target = hack.target.clone();
            self.active = None;
            info!("Locked out of {target}");
            return self.terminal.print_line(
                format!("Terminal locked. Connection to {target} lost.")
                    .red()
                    .bold(),
            );
        }

        self.terminal.print_line(format!(
            "Attempts left: {}",
            attempts_blocks(attempts_left, self.config.max_attempts)
        ))
    }

    fn show_status(&mut self) -> io::Result<()> {
        let difficulty = self.config.difficulty.unwrap_or(self.game.difficulty());
        let connection = self.active.as_ref().map_or_else(
            || "none".to_string(),
            |hack| format!("{} ({} attempts left)", hack.target, hack.attempts_left),
        );

        self.terminal.print_line(format!(
            "Level {} | Score {} | Difficulty {difficulty} | Target {connection}",
            self.game.level, self.game.score
        ))
    }
}
