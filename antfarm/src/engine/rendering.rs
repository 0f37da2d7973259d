use macroquad::prelude::*;
use shared::{AntView, GridPos};

use super::{ANT_COLOR, BACKGROUND_COLOR, QUEEN_COLOR};
use crate::simulation::{Clock, Field, Simulation};

/// Draws the pheromone field and the ants on top of it.
pub struct Renderer {
    /// One pixel per cell, uploaded to `field_texture` every frame.
    field_image: Image,
    field_texture: Texture2D,
    grid_size: u32,
    /// Screen pixels per grid cell.
    cell_size: f32,
    /// Screen position of the field's top-left corner.
    origin: Vec2,
}

impl Renderer {
    pub fn new(grid_size: u32, cell_size: u32, origin: Vec2) -> Self {
        let field_image =
            Image::gen_image_color(grid_size as u16, grid_size as u16, BACKGROUND_COLOR);
        let field_texture = Texture2D::from_image(&field_image);
        field_texture.set_filter(FilterMode::Nearest);

        Self {
            field_image,
            field_texture,
            grid_size,
            cell_size: cell_size as f32,
            origin,
        }
    }

    /// Grid cell under a screen position, if the position lies over the field.
    pub fn cell_at(&self, screen_pos: Vec2) -> Option<GridPos> {
        cell_at_screen(screen_pos, self.origin, self.cell_size, self.grid_size)
    }

    /// Main rendering function. Ants are skipped when `show_ants` is false.
    pub fn render<C: Clock>(&mut self, simulation: &Simulation<C>, show_ants: bool) {
        clear_background(BACKGROUND_COLOR);
        self.draw_field(simulation.field());
        if show_ants {
            self.draw_ants(simulation.ant_views());
        }
    }

    fn draw_field(&mut self, field: &Field) {
        let max = field.max_amount();
        for (y, row) in field.rows().iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let shade = intensity_shade(value, max);
                self.field_image
                    .set_pixel(x as u32, y as u32, Color::new(shade, shade, shade, 1.0));
            }
        }
        self.field_texture.update(&self.field_image);

        let side = field.size() as f32 * self.cell_size;
        draw_texture_ex(
            &self.field_texture,
            self.origin.x,
            self.origin.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(side, side)),
                ..Default::default()
            },
        );
    }

    fn draw_ants(&self, ants: impl Iterator<Item = AntView>) {
        for ant in ants {
            let color = if ant.is_queen { QUEEN_COLOR } else { ANT_COLOR };
            draw_rectangle(
                self.origin.x + ant.pos.x as f32 * self.cell_size,
                self.origin.y + ant.pos.y as f32 * self.cell_size,
                self.cell_size,
                self.cell_size,
                color,
            );
        }
    }
}

/// Gray level in `[0, 1]` for a cell, floored to whole intensity steps.
pub fn intensity_shade(value: f32, max: f32) -> f32 {
    (value.floor() / max).clamp(0.0, 1.0)
}

fn cell_at_screen(screen_pos: Vec2, origin: Vec2, cell_size: f32, grid_size: u32) -> Option<GridPos> {
    let local = (screen_pos - origin) / cell_size;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let (x, y) = (local.x.floor() as u32, local.y.floor() as u32);
    (x < grid_size && y < grid_size).then_some(GridPos::new(x, y))
}
