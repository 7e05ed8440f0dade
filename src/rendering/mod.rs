use crate::application::Session;
use crate::input::InputMapper;
use crate::ui::{BOARD_ORIGIN, Button, CELL_SIZE, Dropdown, PANEL_WIDTH, TextBox, panel_x};
use macroquad::prelude::*;

/// Draw the board from the live-cell projection: one quad per live
/// cell at `origin + cell_size * (x, y)`. Pure consumer - reads the
/// projection and grid extent, never mutates the core.
pub fn draw_board(session: &Session) {
    let (cols, rows) = session.dimensions();
    let (ox, oy) = BOARD_ORIGIN;

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);

    draw_rectangle(
        ox,
        oy,
        cols as f32 * CELL_SIZE,
        rows as f32 * CELL_SIZE,
        Color::from_rgba(15, 15, 15, 255),
    );

    for (x, y) in session.live_cells() {
        draw_rectangle(
            ox + CELL_SIZE * x as f32 + 1.0,
            oy + CELL_SIZE * y as f32 + 1.0,
            CELL_SIZE - 1.0,
            CELL_SIZE - 1.0,
            alive_color,
        );
    }

    // Grid lines
    for x in 0..=cols {
        let px = ox + x as f32 * CELL_SIZE;
        draw_line(px, oy, px, oy + rows as f32 * CELL_SIZE, 1.0, grid_line_color);
    }
    for y in 0..=rows {
        let py = oy + y as f32 * CELL_SIZE;
        draw_line(ox, py, ox + cols as f32 * CELL_SIZE, py, 1.0, grid_line_color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with widgets and status info
pub fn draw_controls(
    session: &Session,
    mapper: &InputMapper,
    buttons: &[Button],
    pattern_dropdown: &Dropdown,
    interval_box: &TextBox,
    status: &str,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    interval_box.draw(mouse_pos);

    let px = panel_x();

    let controls = [
        ("Controls:", px, 370.0, 14.0, WHITE),
        ("Click: Toggle", px, 385.0, 12.0, GRAY),
        ("Drag: Paint/Erase", px, 398.0, 12.0, GRAY),
        ("Space: Run/Stop", px, 411.0, 12.0, GRAY),
        ("C: Clear  R: Random", px, 424.0, 12.0, GRAY),
        ("D: Delete mode", px, 437.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    let (cols, rows) = session.dimensions();
    let info_color = Color::from_rgba(150, 150, 150, 255);
    draw_text(&format!("Grid: {cols}x{rows}"), px, 470.0, 12.0, info_color);
    draw_text(&format!("Generation: {}", session.generation()), px, 485.0, 12.0, info_color);
    draw_text(&format!("Alive: {}", session.board.population()), px, 500.0, 12.0, info_color);
    draw_text(&format!("Interval: {} ms", session.interval_ms()), px, 515.0, 12.0, info_color);

    let state_color = if session.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let state_text = if session.is_running() { "Running" } else { "Idle" };
    draw_text(state_text, px, 535.0, 14.0, state_color);
    if mapper.delete_mode() {
        draw_text("Delete mode", px, 550.0, 14.0, Color::from_rgba(255, 80, 80, 255));
    }

    if !status.is_empty() {
        draw_text(status, px, 575.0, 12.0, Color::from_rgba(255, 120, 120, 255));
    }

    // Last drawn on purpose so the open menu overlays the status text
    pattern_dropdown.draw(mouse_pos);
}
