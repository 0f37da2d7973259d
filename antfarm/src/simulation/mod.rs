pub mod ant;
mod field;
mod sim;
mod timer;
mod world;

// Re-export key types for easier imports
pub use ant::Ant;
pub use field::Field;
pub use sim::Simulation;
pub use timer::{Clock, ManualClock, SystemClock, TickTimer};
pub use world::{RunState, WorldState};

// Grid defaults
pub const DEFAULT_GRID_SIZE: u32 = 100;
pub const DEFAULT_CELL_SIZE: u32 = 7; // Pixels per cell
pub const MAX_GRID_SIZE: u32 = 4096;

// Pheromone field constants
pub const PHEROMONE_DECAY: f32 = 0.01; // Fraction lost per tick
pub const MAX_PHEROMONE_AMOUNT: f32 = 255.0;

// Time constants
pub const DEFAULT_SPEED: u32 = 10; // Ticks per second at 1x
pub const SPEED_STEP: u32 = 5;

// Colony growth constants
pub const REPRODUCTION_INTERVAL_MS: u64 = 5000;
pub const NEW_ANTS_COUNT: u32 = 1; // Per queen per interval
pub const REPRODUCTION_STEP: u32 = 2;
