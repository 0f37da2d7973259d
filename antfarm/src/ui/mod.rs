pub mod components;
pub mod events;

pub use ui_manager::UIManager;

mod ui_manager;

// Base sizes (logical points)
pub const BASE_PADDING: f32 = 6.0;
pub const BASE_SPACING: f32 = 6.0;
pub const BASE_BUTTON_WIDTH: f32 = 64.0;
pub const BASE_BUTTON_HEIGHT: f32 = 28.0;

// Strips above and below the field
pub const CONTROL_PANEL_HEIGHT: f32 = 44.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
