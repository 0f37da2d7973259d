use shared::GridPos;

/// Square pheromone grid. Every cell stays within `[0, max_amount]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    size: u32,
    data: Vec<Vec<f32>>,
    decay_rate: f32,
    max_amount: f32,
}

impl Field {
    pub fn new(size: u32, decay_rate: f32, max_amount: f32) -> Self {
        Self {
            size,
            data: vec![vec![0.0; size as usize]; size as usize],
            decay_rate,
            max_amount,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn max_amount(&self) -> f32 {
        self.max_amount
    }

    /// Intensity at `pos`, or `None` when `pos` lies outside the grid.
    #[inline(always)]
    pub fn get(&self, pos: GridPos) -> Option<f32> {
        self.data
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    /// Adds `amount` at `pos`, saturating at the maximum.
    #[inline(always)]
    pub fn lay(&mut self, pos: GridPos, amount: f32) {
        let cell = &mut self.data[pos.y as usize][pos.x as usize];
        *cell = (*cell + amount).clamp(0.0, self.max_amount);
    }

    /// Multiplies every cell by `1 - decay_rate`.
    pub fn decay(&mut self) {
        let keep = 1.0 - self.decay_rate;
        for row in self.data.iter_mut() {
            for cell in row.iter_mut() {
                *cell = (*cell * keep).max(0.0);
            }
        }
    }

    pub fn clear(&mut self) {
        self.data
            .iter_mut()
            .for_each(|row| row.iter_mut().for_each(|cell| *cell = 0.0));
    }

    /// Row-major snapshot, indexed `[y][x]`.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(|&v| v == 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{MAX_PHEROMONE_AMOUNT, PHEROMONE_DECAY};
    use proptest::prelude::*;

    fn field() -> Field {
        Field::new(10, PHEROMONE_DECAY, MAX_PHEROMONE_AMOUNT)
    }

    #[test]
    fn test_new_field_is_zeroed() {
        let field = field();
        assert!(field.is_empty());
        assert_eq!(field.rows().len(), 10);
        assert!(field.rows().iter().all(|row| row.len() == 10));
    }

    #[test]
    fn test_single_visit_saturates() {
        let mut field = field();
        let pos = GridPos::new(3, 4);
        field.lay(pos, MAX_PHEROMONE_AMOUNT);
        assert_eq!(field.get(pos), Some(255.0));

        field.lay(pos, MAX_PHEROMONE_AMOUNT);
        assert_eq!(field.get(pos), Some(255.0));
    }

    #[test]
    fn test_out_of_range_lookup_is_none() {
        let field = field();
        assert_eq!(field.get(GridPos::new(10, 0)), None);
        assert_eq!(field.get(GridPos::new(0, 10)), None);
    }

    #[test]
    fn test_decay_is_geometric() {
        let mut field = field();
        let pos = GridPos::new(0, 0);
        field.lay(pos, MAX_PHEROMONE_AMOUNT);

        let ticks = 50;
        for _ in 0..ticks {
            field.decay();
        }
        let expected = 255.0 * 0.99f64.powi(ticks);
        let actual = field.get(pos).unwrap() as f64;
        assert!(
            (actual - expected).abs() < 1e-2,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut field = field();
        field.lay(GridPos::new(1, 1), 100.0);
        field.lay(GridPos::new(9, 9), 100.0);
        field.clear();
        assert!(field.is_empty());
    }

    proptest! {
        #[test]
        fn prop_cells_stay_in_range(
            deposits in proptest::collection::vec((0u32..10, 0u32..10, 0.0f32..600.0), 0..40),
            decays in 0usize..20,
        ) {
            let mut field = field();
            for (x, y, amount) in deposits {
                field.lay(GridPos::new(x, y), amount);
            }
            for _ in 0..decays {
                field.decay();
            }
            for row in field.rows() {
                for &v in row {
                    prop_assert!((0.0..=MAX_PHEROMONE_AMOUNT).contains(&v));
                }
            }
        }
    }
}
