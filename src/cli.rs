use clap::Parser;

use mastermind::Code;

/// Break a hidden four digit code, each digit 1-6.
#[derive(Parser, Debug)]
#[command(name = "mastermind", version, long_about = None)]
pub struct Cli {
    /// Number of guesses allowed. Asked for interactively when omitted; 0 gives up before playing.
    #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(i32::MAX)))]
    pub attempts: Option<u32>,

    /// Seed for the code generator, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use this secret instead of generating one.
    #[arg(long, hide = true)]
    pub secret: Option<Code>,

    /// Skip the rules printed at startup.
    #[arg(long)]
    pub quiet_intro: bool,
}
