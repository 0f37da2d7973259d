use catppuccin_egui::set_theme;
use new_egui_macroquad::egui;
use shared::GridPos;

use crate::simulation::{Clock, Simulation};
use crate::ui::components::{ControlPanel, StatusBar};
use crate::ui::events::AppAction;

pub struct UIManager {
    control_panel: ControlPanel,
    status_bar: StatusBar,
}

impl UIManager {
    pub fn new() -> Self {
        Self {
            control_panel: ControlPanel::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// Lays out the panels for this frame and returns the action the user picked, if any.
    pub fn update<C: Clock>(
        &mut self,
        simulation: &Simulation<C>,
        hovered_cell: Option<GridPos>,
    ) -> Option<AppAction> {
        let running = simulation.is_running();
        let stats = simulation.stats();
        let mut app_action = None;

        new_egui_macroquad::ui(|egui_ctx| {
            set_theme(egui_ctx, catppuccin_egui::MOCHA);
            app_action = self.control_panel.draw(egui_ctx, running);
            self.status_bar.draw(egui_ctx, &stats);

            if !egui_ctx.is_pointer_over_area() {
                if let Some(pos) = hovered_cell {
                    Self::draw_pheromone_level_tooltip(egui_ctx, simulation, pos);
                }
            }
        });

        app_action
    }

    pub fn render(&self) {
        new_egui_macroquad::draw();
    }

    /// Display mode only; the simulation keeps running either way.
    pub fn only_pheromones(&self) -> bool {
        self.control_panel.only_pheromones
    }

    pub fn toggle_only_pheromones(&mut self) {
        self.control_panel.only_pheromones = !self.control_panel.only_pheromones;
    }

    fn draw_pheromone_level_tooltip<C: Clock>(
        egui_ctx: &egui::Context,
        simulation: &Simulation<C>,
        pos: GridPos,
    ) {
        let Some(level) = simulation.field_intensity_at(pos).filter(|&v| v > 0.0) else {
            return;
        };
        let tooltip_text = format!("({}, {}) {:.1}", pos.x, pos.y, level);
        let screen_pos = egui_ctx
            .input(|i| i.pointer.hover_pos())
            .unwrap_or_default();
        let target_pos = screen_pos + egui::vec2(0.0, -12.0);
        let layer_id = egui::LayerId::new(egui::Order::Tooltip, "pheromone_tooltip_text".into());
        let painter = egui_ctx.layer_painter(layer_id);
        let text_color = egui_ctx.style().visuals.text_color();
        let font_id = egui::FontId::proportional(16.0);
        let text_galley = egui_ctx.fonts(|f| f.layout_no_wrap(tooltip_text, font_id, text_color));
        let text_pos = egui::pos2(
            target_pos.x - text_galley.size().x / 2.0,
            target_pos.y - text_galley.size().y,
        );
        painter.galley(text_pos, text_galley, text_color);
    }
}
