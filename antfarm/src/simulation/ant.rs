use rand::Rng;
use shared::{AntView, Direction, GridPos};

/// State of an ant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    pub pos: GridPos,
    pub is_queen: bool,
}

impl Ant {
    pub fn new(pos: GridPos, is_queen: bool) -> Self {
        Self { pos, is_queen }
    }

    pub fn queen(pos: GridPos) -> Self {
        Self::new(pos, true)
    }

    pub fn worker(pos: GridPos) -> Self {
        Self::new(pos, false)
    }

    /// Takes one step in a uniformly random orthogonal direction. Returns the new position.
    pub fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R, grid_size: u32) -> GridPos {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        self.step(direction, grid_size)
    }

    pub fn step(&mut self, direction: Direction, grid_size: u32) -> GridPos {
        self.pos = self.pos.step(direction, grid_size);
        self.pos
    }

    pub fn view(&self) -> AntView {
        AntView {
            pos: self.pos,
            is_queen: self.is_queen,
        }
    }
}

/// Picks a birth cell diagonal to `queen_pos`, with an independent random sign per axis.
pub fn brood_position<R: Rng + ?Sized>(rng: &mut R, queen_pos: GridPos, grid_size: u32) -> GridPos {
    let dx = if rng.random_bool(0.5) { -1 } else { 1 };
    let dy = if rng.random_bool(0.5) { -1 } else { 1 };
    queen_pos.offset(dx, dy, grid_size)
}
