use life_sandbox::{
    BuiltinCatalog, InputMapper, Session,
    rendering,
    ui::{self, BOARD_ORIGIN, CELL_SIZE, Dropdown, PANEL_WIDTH, TextBox, grid_area_width},
};
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

// Grid extent in pixels; rows/cols are fixed at startup from this and
// the cell size, the way the board is dimensioned everywhere else.
const BOARD_WIDTH_PX: f32 = 800.0;
const BOARD_HEIGHT_PX: f32 = 800.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Sandbox".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cols = (BOARD_WIDTH_PX / CELL_SIZE) as usize;
    let rows = (BOARD_HEIGHT_PX / CELL_SIZE) as usize;
    let mut session = Session::new(cols, rows, Box::new(BuiltinCatalog::new()));
    let mut mapper = InputMapper::new(BOARD_ORIGIN, CELL_SIZE);

    let mut pattern_items = vec!["Select".to_string()];
    match session.pattern_names() {
        Ok(names) => pattern_items.extend(names),
        Err(err) => tracing::warn!(%err, "pattern index unavailable"),
    }
    let px = ui::panel_x();
    let mut pattern_dropdown = Dropdown::new(px, 20.0, PANEL_WIDTH, "Pattern", pattern_items);
    let mut interval_box = TextBox::new(px, 90.0, PANEL_WIDTH, "Interval (ms)", session.interval_ms().to_string());

    let mut status = String::new();
    let mut last_mouse = mouse_position();

    loop {
        let now_ms = (get_time() * 1000.0) as u64;
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        pattern_dropdown.set_position(px, 20.0);
        interval_box.set_position(px, 90.0);
        let buttons = ui::create_buttons(session.is_running(), mapper.delete_mode());

        // Pattern selection seeds the board through the importer
        if pattern_dropdown.update(mouse_pos) && pattern_dropdown.selected() > 0 {
            let name = pattern_dropdown.item(pattern_dropdown.selected()).to_string();
            match session.load_pattern(&name) {
                Ok(_) => status.clear(),
                Err(err) => status = err.to_string(),
            }
        }

        // Interval commits on Enter; rejected text reverts
        if let Some(text) = interval_box.update(mouse_pos) {
            match session.set_interval_text(&text) {
                Ok(ms) => {
                    interval_box.set_text(ms.to_string());
                    status.clear();
                }
                Err(err) => {
                    status = err.to_string();
                    interval_box.set_text(session.interval_ms().to_string());
                }
            }
        }

        for (idx, btn) in buttons.iter().enumerate() {
            if !btn.is_clicked(mouse_pos) {
                continue;
            }
            match idx {
                0 => {
                    if session.is_running() {
                        session.stop();
                    } else {
                        session.run(now_ms);
                    }
                }
                1 => session.clear(),
                2 => session.randomize(),
                3 => mapper.toggle_delete_mode(),
                _ => {}
            }
        }

        // Pointer editing on the grid area; refused while an import is
        // outstanding and while the dropdown menu overlays the grid
        let on_grid = mouse_pos.0 < grid_area_width() && !pattern_dropdown.captures_pointer(mouse_pos);
        if on_grid && !session.editing_blocked() {
            if is_mouse_button_pressed(MouseButton::Left) {
                mapper.click(&mut session.board, mouse_pos.0, mouse_pos.1);
                mapper.pointer_down();
            }
            if is_mouse_button_down(MouseButton::Left) && mouse_pos != last_mouse {
                mapper.pointer_move(&mut session.board, mouse_pos.0, mouse_pos.1);
            }
        }
        if is_mouse_button_released(MouseButton::Left) {
            mapper.pointer_up();
        }

        if !interval_box.is_focused() {
            if is_key_pressed(KeyCode::Space) {
                if session.is_running() {
                    session.stop();
                } else {
                    session.run(now_ms);
                }
            }
            if is_key_pressed(KeyCode::C) {
                session.clear();
            }
            if is_key_pressed(KeyCode::R) {
                session.randomize();
            }
            if is_key_pressed(KeyCode::D) {
                mapper.toggle_delete_mode();
            }
        }

        session.advance(now_ms);

        clear_background(BLACK);
        rendering::draw_board(&session);
        rendering::draw_controls(
            &session,
            &mapper,
            &buttons,
            &pattern_dropdown,
            &interval_box,
            &status,
            mouse_pos,
        );

        last_mouse = mouse_pos;
        next_frame().await;
    }
}
