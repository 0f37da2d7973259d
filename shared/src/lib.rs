pub mod api;
pub mod util;

pub use api::{AntView, Direction, GridPos, SimulationStats};
