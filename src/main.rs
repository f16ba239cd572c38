//! Console entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_dominoes::{cli, DominoEngine, GameRng};

/// Console dominoes against a heuristic computer opponent.
#[derive(Debug, Parser)]
#[command(name = "dominoes", version, about)]
struct Args {
    /// Seed for a reproducible game; defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "starting game");

    let mut engine = DominoEngine::with_rng(rng);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&mut engine, stdin.lock(), stdout.lock())?;

    Ok(())
}
