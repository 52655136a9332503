use cake_siege::prelude::*;
use cake_siege::world::{parse_scenario, read_scenario};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // diagnostics go to stderr so stdout carries only the final record
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Parse scenario and place towers
    let scenario = match &args.input {
        Some(path) => parse_scenario(path)?,
        None => read_scenario(std::io::stdin().lock())?,
    };
    let mut world = scenario.build_world();
    let ticks = args.ticks.unwrap_or(scenario.ticks);
    tracing::debug!(?scenario, ticks, "scenario loaded");

    // Run simulation
    let mut engine = SimulationEngine::new(args.events);
    let outcome = engine.run_simulation(&mut world, ticks);

    // Print results
    engine.print_summary(outcome, &world);

    Ok(())
}
