use new_egui_macroquad::egui;

use crate::ui::events::AppAction;
use crate::ui::{BASE_BUTTON_HEIGHT, BASE_BUTTON_WIDTH, BASE_PADDING, BASE_SPACING, CONTROL_PANEL_HEIGHT};

/// Strip of simulation controls above the field
pub struct ControlPanel {
    pub only_pheromones: bool,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            only_pheromones: false,
        }
    }

    fn button(ui: &mut egui::Ui, label: &str, enabled: bool) -> bool {
        ui.add_enabled(
            enabled,
            egui::Button::new(label).min_size(egui::vec2(BASE_BUTTON_WIDTH, BASE_BUTTON_HEIGHT)),
        )
        .clicked()
    }

    /// Draw the panel. Returns the action of the button clicked this frame, if any.
    pub fn draw(&mut self, egui_ctx: &egui::Context, running: bool) -> Option<AppAction> {
        let mut app_action = None;

        egui::TopBottomPanel::top("control_panel")
            .exact_height(CONTROL_PANEL_HEIGHT)
            .resizable(false)
            .show(egui_ctx, |ui| {
                ui.add_space(BASE_PADDING);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = BASE_SPACING;

                    if Self::button(ui, "Start", !running) {
                        app_action = Some(AppAction::Start);
                    }
                    if Self::button(ui, "Stop", running) {
                        app_action = Some(AppAction::Stop);
                    }
                    if Self::button(ui, "Fast", true) {
                        app_action = Some(AppAction::FastForward);
                    }
                    if Self::button(ui, "Reset speed", true) {
                        app_action = Some(AppAction::ResetSpeed);
                    }
                    if Self::button(ui, "More ants", true) {
                        app_action = Some(AppAction::IncreaseReproduction);
                    }
                    if Self::button(ui, "Reset", true) {
                        app_action = Some(AppAction::Reset);
                    }

                    ui.separator();
                    ui.checkbox(&mut self.only_pheromones, "Only pheromones");
                });
            });

        app_action
    }
}
