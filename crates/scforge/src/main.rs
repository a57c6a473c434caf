//! `scforge`: interactive generator for SpaceEngine `.sc` scripts
//!
//! Prompts for generation parameters, validates them, and hands a
//! fully-populated specification to the generation engine. Pass `--seed`
//! to make a run reproducible.

mod menu;
mod prompts;
mod validate;


use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing_subscriber::EnvFilter;

/// Generates moons, asteroids, and comets in SpaceEngine's script format.
#[derive(Debug, Parser)]
#[command(name = "scforge", version)]
struct Cli {
    /// Seed for the random generator; omit for a fresh run each time
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = match cli.seed {
        Some(seed) => ChaChaRng::seed_from_u64(seed),
        None => ChaChaRng::from_os_rng(),
    };

    menu::run(&mut rng)
}
