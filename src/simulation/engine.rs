use crate::world::{TickReport, World};
use colored::Colorize;
use std::fmt::Write as _;
use std::time::Instant;

/// How a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The cake reached the nest on this (1-based) tick
    GameOver { tick: u32 },
    /// The tick budget ran out first
    Running,
}

/// Drives a world tick by tick for a bounded budget
pub struct SimulationEngine {
    show_events: bool,
}

impl SimulationEngine {
    /// Create a new engine; `show_events` turns on the stderr event feed
    pub fn new(show_events: bool) -> Self {
        Self { show_events }
    }

    /// Run until the cake gets home or `ticks` ticks have passed
    pub fn run_simulation(&mut self, world: &mut World, ticks: u32) -> Outcome {
        let sim_start = Instant::now();
        let mut outcome = Outcome::Running;

        for tick in 1..=ticks {
            let report = world.tick();
            self.log_events(tick, &report);
            if report.finished {
                outcome = Outcome::GameOver { tick };
                break;
            }
        }

        tracing::info!(
            ?outcome,
            survivors = world.ants().len(),
            spawned = world.spawned(),
            elapsed_ms = sim_start.elapsed().as_secs_f64() * 1000.0,
            "simulation finished"
        );
        outcome
    }

    /// Event feed for one tick
    fn log_events(&self, tick: u32, report: &TickReport) {
        if !self.show_events {
            return;
        }
        let stamp = format!("[tick {tick}]").dimmed();
        if let Some((id, level)) = report.spawned {
            eprintln!(
                "{} {} {}",
                stamp,
                "🐜".green(),
                format!("ant {id} hatched at level {level}").green()
            );
        }
        if let Some(id) = report.cake_taken_by {
            eprintln!(
                "{} {} {}",
                stamp,
                "🍰".yellow(),
                format!("ant {id} grabbed the cake").yellow().bold()
            );
        }
        for id in &report.killed {
            eprintln!(
                "{} {} {}",
                stamp,
                "💥".red(),
                format!("ant {id} was shot down").bright_red()
            );
        }
        if report.finished {
            eprintln!(
                "{} {}",
                stamp,
                "the cake reached the nest".bright_blue().bold()
            );
        }
    }

    /// Print the final record to stdout
    pub fn print_summary(&self, outcome: Outcome, world: &World) {
        print!("{}", render_report(outcome, world));
    }
}

/// Final record: the verdict line, the survivor count, then one
/// `age level hp row col` line per ant in collection order
pub fn render_report(outcome: Outcome, world: &World) -> String {
    let mut out = String::with_capacity(64 + world.ants().len() * 24);
    match outcome {
        Outcome::GameOver { tick } => {
            let _ = writeln!(out, "Game over after {tick} seconds");
        }
        Outcome::Running => out.push_str("The game is going on\n"),
    }
    let _ = writeln!(out, "{}", world.ants().len());
    for ant in world.ants() {
        let _ = writeln!(out, "{ant}");
    }
    out
}
