use macroquad::prelude::*;

/// Single-line text entry. Click to focus, type freely, Enter commits.
/// Validation is the caller's job; the box yields the raw text.
pub struct TextBox {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    text: String,
    focused: bool,
}

impl TextBox {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            text: text.into(),
            focused: false,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Replace the displayed text (used to revert rejected input)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Handle focus, typing and commit. Returns the entered text when
    /// Enter is pressed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<String> {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = self.is_hovered(mouse_pos);
        }
        if !self.focused {
            // Drain stray characters so they don't appear on focus
            while get_char_pressed().is_some() {}
            return None;
        }

        while let Some(ch) = get_char_pressed() {
            if !ch.is_control() && self.text.len() < 12 {
                self.text.push(ch);
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.text.pop();
        }
        if is_key_pressed(KeyCode::Enter) {
            self.focused = false;
            return Some(self.text.clone());
        }
        None
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let border = if self.focused {
            WHITE
        } else if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(120, 120, 120, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, Color::from_rgba(20, 20, 20, 255));
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        let shown = if self.focused {
            format!("{}_", self.text)
        } else {
            self.text.clone()
        };
        draw_text(&shown, self.x + 5.0, self.y + 21.0, 16.0, WHITE);
    }
}
