//! # Cake Siege
//!
//! A deterministic tick-based siege: ants leave the nest at `(0, 0)`, follow
//! pheromone trails to the cake at the far corner and try to carry it home
//! while towers shoot beams at them.
//!
//! All distance checks use exact integer and rational arithmetic, so a run is
//! reproducible bit for bit from its input.

pub mod ant;
pub mod cli;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod simulation;
pub mod world;

pub use ant::Ant;
pub use cli::Args;
pub use direction::Direction;
pub use error::{ParseError, Result};
pub use geometry::{Coord, Fraction, Line, Segment};
pub use simulation::{Outcome, SimulationEngine};
pub use world::{Scenario, World};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Coord, Direction, Outcome, ParseError, Result, Scenario, SimulationEngine,
        World,
    };
}
