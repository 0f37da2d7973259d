use crate::config::SimulationConfig;
use crate::engine::Renderer;
use crate::error::ConfigError;
use crate::simulation::{Simulation, SystemClock};
use crate::ui::events::AppAction;
use crate::ui::{CONTROL_PANEL_HEIGHT, UIManager};
use macroquad::prelude::*;
use tracing::info;

/// Main application structure for the windowed simulation.
pub struct AntFarmApp {
    ui: UIManager,                      // Control panel and status bar.
    renderer: Renderer,                 // Draws the field and the ants.
    simulation: Simulation<SystemClock>, // Ticks paced against real time.
}

impl AntFarmApp {
    /// Creates the app. Must run inside the macroquad window, which owns the GL context.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let renderer = Renderer::new(
            config.grid_size,
            config.cell_size,
            Vec2::new(0.0, CONTROL_PANEL_HEIGHT),
        );
        let simulation = Simulation::new(config, SystemClock::new())?;

        Ok(Self {
            ui: UIManager::new(),
            renderer,
            simulation,
        })
    }

    /// Runs the main application loop.
    pub async fn run(&mut self) {
        info!("window opened, press Space to start");
        loop {
            // Runs every tick due since the last frame.
            self.simulation.pump();

            self.update_ui();
            self.render();

            next_frame().await;
        }
    }

    fn update_ui(&mut self) {
        let shortcut_action = self.handle_global_shortcuts();
        let hovered_cell = self.renderer.cell_at(Vec2::from(mouse_position()));
        let ui_action = self.ui.update(&self.simulation, hovered_cell);

        if let Some(action) = shortcut_action.or(ui_action) {
            action.apply(&mut self.simulation);
        }
    }

    /// Handles global keyboard shortcuts.
    fn handle_global_shortcuts(&mut self) -> Option<AppAction> {
        if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::P) {
            Some(AppAction::TogglePause)
        } else if is_key_pressed(KeyCode::F) {
            Some(AppAction::FastForward)
        } else if is_key_pressed(KeyCode::N) {
            Some(AppAction::ResetSpeed)
        } else if is_key_pressed(KeyCode::M) {
            Some(AppAction::IncreaseReproduction)
        } else if is_key_pressed(KeyCode::R) {
            Some(AppAction::Reset)
        } else {
            if is_key_pressed(KeyCode::O) {
                self.ui.toggle_only_pheromones();
            }
            None
        }
    }

    /// Renders the current simulation state and UI.
    fn render(&mut self) {
        let show_ants = !self.ui.only_pheromones();
        self.renderer.render(&self.simulation, show_ants);
        self.ui.render();
    }
}
