use new_egui_macroquad::egui;
use shared::SimulationStats;

use crate::ui::{BASE_SPACING, STATUS_BAR_HEIGHT};

pub struct StatusBar {}

impl StatusBar {
    pub fn new() -> Self {
        Self {}
    }

    pub fn draw(&mut self, ctx: &egui::Context, stats: &SimulationStats) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.spacing_mut().item_spacing.x = BASE_SPACING * 2.0;
                    for text in status_texts(stats) {
                        ui.label(text);
                    }
                });
            });
    }
}

fn status_texts(stats: &SimulationStats) -> [String; 4] {
    [
        format!("No. of Ants: {}", stats.ant_count),
        format!("Time Passed: {:.1}s", stats.sim_time_secs()),
        format!("Speed: {} ticks/s", stats.speed),
        format!("New ants per queen: {}", stats.new_ants_count),
    ]
}
