mod rendering;

pub use rendering::Renderer;

use macroquad::prelude::Color;

pub const BACKGROUND_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const ANT_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0); // red
pub const QUEEN_COLOR: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0); // orange
