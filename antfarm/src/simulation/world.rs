use shared::GridPos;

use super::{Ant, Field};
use crate::config::SimulationConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Timestamps and rate state. Wall-clock values are milliseconds from the engine's clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockState {
    pub sim_time_ms: f64,
    pub last_tick_ms: u64,
    pub last_reproduction_ms: u64,
    pub run_state: RunState,
    pub speed: u32, // Ticks per second
}

impl ClockState {
    fn new(now_ms: u64, speed: u32) -> Self {
        Self {
            sim_time_ms: 0.0,
            last_tick_ms: now_ms,
            last_reproduction_ms: now_ms,
            run_state: RunState::Stopped,
            speed,
        }
    }
}

/// Authoritative snapshot of the field, the ants and the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    grid_size: u32,
    baseline_speed: u32,
    pub(super) field: Field,
    pub(super) ants: Vec<Ant>,
    pub(super) clock: ClockState,
}

impl WorldState {
    pub fn new(config: &SimulationConfig, now_ms: u64) -> Self {
        Self {
            grid_size: config.grid_size,
            baseline_speed: config.baseline_speed,
            field: Field::new(config.grid_size, config.decay_rate, config.max_intensity),
            ants: starting_ants(config.grid_size),
            clock: ClockState::new(now_ms, config.baseline_speed),
        }
    }

    /// Zeroes the field, restores the queen and her first worker, and clears the clock.
    pub fn reset(&mut self, now_ms: u64) {
        self.field.clear();
        self.ants = starting_ants(self.grid_size);
        self.clock = ClockState::new(now_ms, self.baseline_speed);
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn agent_count(&self) -> usize {
        self.ants.len()
    }

    /// Field value at `pos`. Coordinates outside the grid yield `None`.
    pub fn field_intensity_at(&self, pos: GridPos) -> Option<f32> {
        self.field.get(pos)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }
}

fn starting_ants(grid_size: u32) -> Vec<Ant> {
    let center = GridPos::new(grid_size / 2, grid_size / 2);
    vec![
        Ant::queen(center),
        Ant::worker(center.offset(1, 0, grid_size)),
    ]
}
