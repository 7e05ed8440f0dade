mod button;
mod dropdown;
mod textbox;

pub use button::Button;
pub use dropdown::Dropdown;
pub use textbox::TextBox;

// UI constants - panel on the right, grid fills the rest
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Pixel size of one cell; rows/cols are derived from the grid extent
/// at startup and never change afterwards
pub const CELL_SIZE: f32 = 10.0;

/// Device position of grid cell (0, 0)
pub const BOARD_ORIGIN: (f32, f32) = (0.0, 0.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Create control buttons with standard layout.
/// Index order matters to the click dispatch in main.
pub fn create_buttons(running: bool, delete_mode: bool) -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 150.0, PANEL_WIDTH, BUTTON_HEIGHT, if running { "Stop" } else { "Run" }),
        Button::new(px, 200.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 250.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
        Button::new(px, 300.0, PANEL_WIDTH, BUTTON_HEIGHT, "Delete mode").active(delete_mode),
    ]
}
