use macroquad::prelude::Conf;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::simulation::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_SPEED, MAX_GRID_SIZE, MAX_PHEROMONE_AMOUNT,
    NEW_ANTS_COUNT, PHEROMONE_DECAY, REPRODUCTION_INTERVAL_MS, REPRODUCTION_STEP, SPEED_STEP,
};
use crate::ui::{CONTROL_PANEL_HEIGHT, STATUS_BAR_HEIGHT};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub grid_size: u32,
    pub cell_size: u32, // Pixels per cell in the window
    pub decay_rate: f32,
    pub max_intensity: f32,
    pub baseline_speed: u32, // Ticks per second at 1x
    pub reproduction_interval_ms: u64,
    pub new_ants_count: u32, // Ants spawned per queen per interval
    pub speed_step: u32,
    pub reproduction_step: u32,
    pub max_ants: Option<usize>, // Unbounded when unset
    pub max_speed: Option<u32>,
    pub max_new_ants_count: Option<u32>,
    pub seed: Option<u64>, // Seeded from the OS when unset
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            decay_rate: PHEROMONE_DECAY,
            max_intensity: MAX_PHEROMONE_AMOUNT,
            baseline_speed: DEFAULT_SPEED,
            reproduction_interval_ms: REPRODUCTION_INTERVAL_MS,
            new_ants_count: NEW_ANTS_COUNT,
            speed_step: SPEED_STEP,
            reproduction_step: REPRODUCTION_STEP,
            max_ants: None,
            max_speed: None,
            max_new_ants_count: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reads and validates a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(invalid(format!(
                "grid_size must be in 1..={}, got {}",
                MAX_GRID_SIZE, self.grid_size
            )));
        }
        if self.cell_size == 0 {
            return Err(invalid("cell_size must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.decay_rate) {
            return Err(invalid(format!(
                "decay_rate must be within [0, 1], got {}",
                self.decay_rate
            )));
        }
        if !self.max_intensity.is_finite() || self.max_intensity <= 0.0 {
            return Err(invalid(format!(
                "max_intensity must be a positive number, got {}",
                self.max_intensity
            )));
        }
        if self.baseline_speed == 0 {
            return Err(invalid("baseline_speed must be positive".to_string()));
        }
        if let Some(max_speed) = self.max_speed {
            if max_speed < self.baseline_speed {
                return Err(invalid(format!(
                    "max_speed ({}) is below baseline_speed ({})",
                    max_speed, self.baseline_speed
                )));
            }
        }
        if let Some(max_new) = self.max_new_ants_count {
            if max_new < self.new_ants_count {
                return Err(invalid(format!(
                    "max_new_ants_count ({}) is below new_ants_count ({})",
                    max_new, self.new_ants_count
                )));
            }
        }
        // The starting population is a queen and one worker.
        if let Some(max_ants) = self.max_ants {
            if max_ants < 2 {
                return Err(invalid(format!("max_ants must be at least 2, got {}", max_ants)));
            }
        }
        Ok(())
    }

    /// Side length of the rendered field in pixels.
    pub fn field_pixels(&self) -> u32 {
        self.grid_size * self.cell_size
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

pub fn window_conf(config: &SimulationConfig) -> Conf {
    let field = config.field_pixels() as f32;
    Conf {
        window_title: "Ant Colony Simulation".to_owned(),
        window_width: field as i32,
        window_height: (field + CONTROL_PANEL_HEIGHT + STATUS_BAR_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 100);
        assert_eq!(config.cell_size, 7);
        assert_eq!(config.baseline_speed, 10);
        assert_eq!(config.reproduction_interval_ms, 5000);
        assert_eq!(config.new_ants_count, 1);
        assert_eq!(config.field_pixels(), 700);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str("grid_size = 40\nseed = 3\n").unwrap();
        assert_eq!(config.grid_size, 40);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.decay_rate, PHEROMONE_DECAY);
        assert_eq!(config.max_ants, None);
    }

    #[test]
    fn test_zero_grid_size_is_rejected() {
        let err = SimulationConfig::from_toml_str("grid_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn test_out_of_range_decay_rate_is_rejected() {
        let config = SimulationConfig {
            decay_rate: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bounds_below_starting_values_are_rejected() {
        let slow_cap = SimulationConfig {
            max_speed: Some(5),
            ..Default::default()
        };
        assert!(slow_cap.validate().is_err());

        let tiny_colony = SimulationConfig {
            max_ants: Some(1),
            ..Default::default()
        };
        assert!(tiny_colony.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = SimulationConfig::from_toml_str("grid_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = SimulationConfig::load(Path::new("/nonexistent/antfarm.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
