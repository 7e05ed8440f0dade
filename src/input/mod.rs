use crate::domain::{Board, Cell};
use tracing::trace;

/// InputMapper converts pointer geometry into board mutations.
///
/// Click: toggle the mapped cell iff it is strictly inside
/// [0, cols) x [0, rows). Drag: while the button is held, every move
/// sample unconditionally sets the mapped cell live (paint mode) or
/// dead (delete mode). Samples are not interpolated - a fast drag can
/// skip cells between two sparse samples, which is accepted.
pub struct InputMapper {
    origin: (f32, f32),
    cell_size: f32,
    delete_mode: bool,
    dragging: bool,
}

impl InputMapper {
    /// `origin` is the device position of grid cell (0, 0);
    /// `cell_size` the pixel extent of one cell
    pub fn new(origin: (f32, f32), cell_size: f32) -> Self {
        Self {
            origin,
            cell_size,
            delete_mode: false,
            dragging: false,
        }
    }

    /// Map a device position to a grid coordinate by translating into
    /// board-local space and floor-dividing by the cell size. Floor,
    /// not truncation: positions left/above the origin map negative.
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> (i32, i32) {
        let x = ((px - self.origin.0) / self.cell_size).floor() as i32;
        let y = ((py - self.origin.1) / self.cell_size).floor() as i32;
        (x, y)
    }

    /// Primary click: toggle the mapped cell, strictly-exclusive bounds
    pub fn click(&self, board: &mut Board, px: f32, py: f32) {
        let (x, y) = self.pixel_to_cell(px, py);
        if board.in_bounds(x as i64, y as i64) {
            board.toggle(x as usize, y as usize);
        } else {
            trace!(x, y, "click outside grid");
        }
    }

    pub fn pointer_down(&mut self) {
        self.dragging = true;
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drag sample: paint or delete the mapped cell while the button
    /// is held. No-op when not dragging or outside the grid.
    pub fn pointer_move(&mut self, board: &mut Board, px: f32, py: f32) {
        if !self.dragging {
            return;
        }
        let (x, y) = self.pixel_to_cell(px, py);
        if board.in_bounds(x as i64, y as i64) {
            let cell = if self.delete_mode { Cell::Dead } else { Cell::Alive };
            board.set(x as usize, y as usize, cell);
        }
    }

    pub fn delete_mode(&self) -> bool {
        self.delete_mode
    }

    pub fn set_delete_mode(&mut self, on: bool) {
        self.delete_mode = on;
    }

    pub fn toggle_delete_mode(&mut self) {
        self.delete_mode = !self.delete_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> InputMapper {
        InputMapper::new((10.0, 20.0), 10.0)
    }

    #[test]
    fn test_pixel_to_cell_floor_division() {
        let m = mapper();
        assert_eq!(m.pixel_to_cell(10.0, 20.0), (0, 0));
        assert_eq!(m.pixel_to_cell(19.9, 29.9), (0, 0));
        assert_eq!(m.pixel_to_cell(20.0, 30.0), (1, 1));
        assert_eq!(m.pixel_to_cell(45.0, 57.0), (3, 3));
    }

    #[test]
    fn test_pixel_to_cell_floors_negatives() {
        let m = mapper();
        // 0.1px left of the origin is cell -1, not cell 0
        assert_eq!(m.pixel_to_cell(9.9, 20.0), (-1, 0));
        assert_eq!(m.pixel_to_cell(10.0, 12.0), (0, -1));
    }

    #[test]
    fn test_render_placement_round_trips() {
        // A live cell at (x, y) renders at origin + cell_size * (x, y);
        // that pixel must map back to (x, y)
        let m = mapper();
        for &(x, y) in &[(0usize, 0usize), (3, 7), (12, 1)] {
            let px = 10.0 + 10.0 * x as f32;
            let py = 20.0 + 10.0 * y as f32;
            assert_eq!(m.pixel_to_cell(px, py), (x as i32, y as i32));
        }
    }

    #[test]
    fn test_click_toggles_inside_grid() {
        let m = mapper();
        let mut board = Board::new(8, 8);
        m.click(&mut board, 35.0, 45.0); // cell (2, 2)
        assert!(board.get(2, 2));
        m.click(&mut board, 35.0, 45.0);
        assert!(!board.get(2, 2));
    }

    #[test]
    fn test_click_on_outer_edge_is_noop() {
        let m = mapper();
        let mut board = Board::new(8, 8);
        // First pixel past the last column maps to x == cols; the
        // boundary is exclusive on both ends
        m.click(&mut board, 10.0 + 8.0 * 10.0, 25.0);
        m.click(&mut board, 15.0, 20.0 + 8.0 * 10.0);
        m.click(&mut board, 5.0, 25.0); // negative cell
        assert!(board.live_cells().is_empty());
    }

    #[test]
    fn test_drag_paints_cells() {
        let mut m = mapper();
        let mut board = Board::new(8, 8);
        m.pointer_down();
        m.pointer_move(&mut board, 15.0, 25.0); // (0, 0)
        m.pointer_move(&mut board, 35.0, 25.0); // (2, 0)
        m.pointer_up();
        assert_eq!(board.live_cells(), vec![(0, 0), (2, 0)]);
    }

    #[test]
    fn test_drag_paint_is_unconditional_set() {
        let mut m = mapper();
        let mut board = Board::new(8, 8);
        board.set(0, 0, Cell::Alive);
        m.pointer_down();
        // Painting an already-live cell keeps it live (set, not toggle)
        m.pointer_move(&mut board, 15.0, 25.0);
        assert!(board.get(0, 0));
    }

    #[test]
    fn test_delete_mode_drag_erases() {
        let mut m = mapper();
        let mut board = Board::new(8, 8);
        board.set(1, 1, Cell::Alive);
        m.set_delete_mode(true);
        m.pointer_down();
        m.pointer_move(&mut board, 25.0, 35.0); // (1, 1)
        assert!(!board.get(1, 1));
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut m = mapper();
        let mut board = Board::new(8, 8);
        m.pointer_move(&mut board, 15.0, 25.0);
        assert!(board.live_cells().is_empty());
    }
}
