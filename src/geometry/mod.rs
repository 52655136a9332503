//! Exact integer/rational geometry: no square roots, no floats.

pub mod coord;
pub mod line;
pub mod rational;

pub use coord::Coord;
pub use line::{Line, Segment};
pub use rational::Fraction;
