//! Interactive play mode
//!
//! Runs a hacking session on stdin/stdout.

use crate::core::Word;
use crate::interactive::{Session, SessionConfig};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

/// Run an interactive session on the process terminal
///
/// A `seed` makes every puzzle of the session reproducible; without one the
/// random source is seeded from the operating system.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_play(config: SessionConfig, pool: &[Word], seed: Option<u64>) -> Result<()> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut session = Session::new(config, pool, rng, io::stdout());
    session.run(io::stdin().lock())
}
