//! Terminal Hacking Game - CLI
//!
//! Interactive play plus puzzle generation and survey tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use terminal_hacking::{
    commands::{GenerateConfig, generate_puzzle, run_play, run_survey},
    core::{Difficulty, Word},
    interactive::{DEFAULT_ATTEMPTS, MAX_ATTEMPTS, SessionConfig},
    output::{print_generated_puzzle, print_survey_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "terminal_hacking",
    about = "Terminal hacking minigame: find the password among the decoys",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium, hard, expert (default: follows the game level)
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal session (default)
    Play {
        /// Entry attempts per puzzle before the terminal locks (1-10)
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_ATTEMPTS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ATTEMPTS))
        )]
        attempts: u32,

        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a single puzzle and print it
    Generate {
        /// Number of hints to reveal
        #[arg(long, default_value = "0")]
        hints: usize,

        /// Also print the password
        #[arg(short, long)]
        reveal: bool,

        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate many puzzles per difficulty and report statistics
    Survey {
        /// Number of puzzles per difficulty
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

/// Load the word pool based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use terminal_hacking::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            info!("Loaded {} words from {path}", words.len());
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());

    let cli = Cli::parse();
    let pool = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        attempts: DEFAULT_ATTEMPTS,
        seed: None,
    });

    match command {
        Commands::Play { attempts, seed } => {
            let config = SessionConfig {
                difficulty: cli.difficulty,
                max_attempts: attempts,
            };
            run_play(config, &pool, seed)
        }
        Commands::Generate {
            hints,
            reveal,
            seed,
        } => {
            let config = GenerateConfig {
                difficulty: cli.difficulty.unwrap_or_default(),
                hints,
                reveal,
                seed,
            };
            let result = generate_puzzle(&config, &pool)?;
            print_generated_puzzle(&result);
            Ok(())
        }
        Commands::Survey { count } => {
            println!("🎯 Surveying {count} puzzles per difficulty...");
            let result = run_survey(&pool, count);
            print_survey_result(&result);
            Ok(())
        }
    }
}
