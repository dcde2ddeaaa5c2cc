//! Terminal Hacking Game
//!
//! A terminal hacking minigame: find the password among a screen of decoy words,
//! with likeness feedback and hints, and climb through the security levels.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use terminal_hacking::puzzle::{HackingPuzzle, PuzzleConfig};
//!
//! let mut puzzle = HackingPuzzle::create(&PuzzleConfig::from_name("hard").unwrap()).unwrap();
//! println!("Candidates: {}", puzzle.words().len());
//! println!("{}", puzzle.get_hint());
//! assert!(puzzle.check_password(puzzle.password().text()));
//! ```

// Core domain types
pub mod core;

// Puzzle generation, password checking and hints
pub mod puzzle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive terminal session
pub mod interactive;
