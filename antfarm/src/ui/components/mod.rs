// Components for the UI system
mod control_panel;
mod status_bar;

// Export components
pub use control_panel::ControlPanel;
pub use status_bar::StatusBar;
