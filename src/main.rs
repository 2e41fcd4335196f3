mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use mastermind::{input::Console, render, Session};

fn main() -> Result<()> {
    // Honor `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    if !cli.quiet_intro {
        console.say(render::INSTRUCTIONS)?;
    }

    let attempts = match cli.attempts {
        Some(n) => n,
        None => console.ask_attempts()?,
    };

    let mut session = match (cli.secret, cli.seed) {
        (Some(code), _) => Session::new(code, attempts),
        (None, Some(seed)) => Session::random(&mut StdRng::seed_from_u64(seed), attempts),
        (None, None) => Session::random(&mut rand::rng(), attempts),
    };
    info!(attempts, seeded = cli.seed.is_some(), "starting game");

    let status = session.play(&mut console)?;
    console.say(render::outcome(status))?;
    Ok(())
}
