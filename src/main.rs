use std::env;
use std::io;

use eyre::{Result, WrapErr};
use nextpieces::PieceQueue;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

const SEED_VAR: &str = "NEXTPIECES_SEED";

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut queue = match env::var(SEED_VAR) {
        Ok(seed) => {
            let seed: u64 = seed
                .trim()
                .parse()
                .wrap_err_with(|| format!("{} must be an unsigned integer, got {:?}", SEED_VAR, seed))?;
            tracing::info!(seed, "using fixed seed");
            PieceQueue::initialize_with(StdRng::seed_from_u64(seed))
        }
        Err(_) => PieceQueue::initialize(),
    };

    let stdin = io::stdin();
    nextpieces::menu::run(&mut queue, stdin.lock(), io::stdout()).wrap_err("menu loop failed")?;
    Ok(())
}
