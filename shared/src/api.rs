use serde::{Deserialize, Serialize};

use crate::util::wrap_coord;

/// Cell coordinate on the toroidal grid. Both axes lie in `[0, grid_size)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Moves by `(dx, dy)`, wrapping around both axes.
    #[inline(always)]
    pub fn offset(self, dx: i32, dy: i32, grid_size: u32) -> Self {
        Self {
            x: wrap_coord(self.x, dx, grid_size),
            y: wrap_coord(self.y, dy, grid_size),
        }
    }

    #[inline(always)]
    pub fn step(self, direction: Direction, grid_size: u32) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy, grid_size)
    }
}

/// Orthogonal unit steps. `y` grows downwards, as on screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    North,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::South => (0, 1),
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Read-only view of one ant, as handed to renderers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntView {
    pub pos: GridPos,
    pub is_queen: bool,
}

/// Counters shown next to the simulation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationStats {
    pub ant_count: usize,
    pub sim_time_ms: f64,
    pub speed: u32,
    pub new_ants_count: u32,
    pub ticks: u64,
    pub running: bool,
}

impl SimulationStats {
    /// Simulated time in seconds, rounded to one decimal for display.
    pub fn sim_time_secs(&self) -> f64 {
        (self.sim_time_ms / 100.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "Not a unit step: {:?}", dir);
        }
    }

    #[test]
    fn test_step_wraps_at_edges() {
        let size = 100;
        assert_eq!(
            GridPos::new(0, 0).step(Direction::West, size),
            GridPos::new(99, 0)
        );
        assert_eq!(
            GridPos::new(0, 0).step(Direction::North, size),
            GridPos::new(0, 99)
        );
        assert_eq!(
            GridPos::new(99, 99).step(Direction::East, size),
            GridPos::new(0, 99)
        );
        assert_eq!(
            GridPos::new(99, 99).step(Direction::South, size),
            GridPos::new(99, 0)
        );
    }

    #[test]
    fn test_sim_time_secs_rounding() {
        let stats = SimulationStats {
            ant_count: 2,
            sim_time_ms: 12_349.0,
            speed: 10,
            new_ants_count: 1,
            ticks: 0,
            running: false,
        };
        assert_eq!(stats.sim_time_secs(), 12.3);
    }
}
