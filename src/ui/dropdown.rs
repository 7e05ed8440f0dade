use macroquad::prelude::*;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn item(&self, index: usize) -> &str {
        &self.items[index]
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);
        draw_text(&self.items[self.selected], self.x + 5.0, self.y + 21.0, 16.0, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if self.is_open {
            let menu_height = self.items.len() as f32 * self.height;
            draw_rectangle(
                self.x,
                self.y + self.height,
                self.width,
                menu_height,
                Color::from_rgba(30, 30, 30, 255),
            );

            for (i, item) in self.items.iter().enumerate() {
                let item_y = self.y + self.height + (i as f32 * self.height);
                let item_color = if self.is_hovered_item(mouse_pos, i) {
                    Color::from_rgba(100, 149, 237, 255)
                } else if i == self.selected {
                    Color::from_rgba(50, 100, 150, 255)
                } else {
                    Color::from_rgba(45, 45, 45, 255)
                };
                draw_rectangle(self.x, item_y, self.width, self.height, item_color);
                draw_text(item, self.x + 5.0, item_y + 21.0, 16.0, WHITE);
            }

            draw_rectangle_lines(
                self.x,
                self.y + self.height,
                self.width,
                menu_height,
                2.0,
                WHITE,
            );
        }
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.is_hovered_main(mouse_pos) && is_mouse_button_pressed(MouseButton::Left) {
            self.is_open = !self.is_open;
            return false;
        }

        if self.is_open {
            for i in 0..self.items.len() {
                if self.is_hovered_item(mouse_pos, i) && is_mouse_button_pressed(MouseButton::Left) {
                    let changed = self.selected != i;
                    self.selected = i;
                    self.is_open = false;
                    return changed;
                }
            }
            if is_mouse_button_pressed(MouseButton::Left) {
                self.is_open = false;
            }
        }

        false
    }

    /// Whether the open menu currently swallows pointer input
    pub fn captures_pointer(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_open && (self.is_hovered_main(mouse_pos) || self.any_item_hovered(mouse_pos))
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.y + self.height + (index as f32 * self.height);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }

    fn any_item_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i))
    }
}
