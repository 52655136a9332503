pub mod parser;
pub mod pheromone;
pub mod tower;
pub mod world;

pub use parser::{parse_scenario, parse_scenario_from_str, read_scenario, Scenario};
pub use pheromone::PheromoneField;
pub use tower::Tower;
pub use world::{TickReport, World};
