use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the siege simulation
#[derive(Parser, Debug)]
#[command(name = "cake_siege", about = "🐜 Ants raid the cake, towers defend it")]
pub struct Args {
    /// Scenario file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Override the tick budget given in the scenario
    #[arg(short = 't', long = "ticks")]
    pub ticks: Option<u32>,

    /// Print a colored log of spawns, pickups and kills to stderr
    #[arg(long, default_value_t = false)]
    pub events: bool,
}
