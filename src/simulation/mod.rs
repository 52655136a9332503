pub mod engine;

pub use engine::{render_report, Outcome, SimulationEngine};
