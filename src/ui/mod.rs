mod button;

pub use button::Button;

// UI constants - now functions for responsive layout
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Create UI buttons with standard layout: Next, then Strategy
pub fn create_buttons(cycle_running: bool) -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Next").with_enabled(!cycle_running),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Strategy"),
    ]
}
