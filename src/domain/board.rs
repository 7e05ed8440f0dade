use super::Cell;
use rand::Rng;
use tracing::trace;

/// Board owns the dense live/dead matrix of the sandbox.
/// The extent is fixed at construction; bounds are strictly exclusive
/// on both ends, and out-of-bounds writes are silent no-ops so edit
/// handlers stay responsive during fast pointer movement.
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get board dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether a signed coordinate pair lies strictly inside
    /// [0, cols) x [0, rows)
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Cell liveness at (x, y); out-of-bounds reads as dead
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)].is_alive()
    }

    /// Set cell at (x, y); out-of-bounds is a no-op
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        } else {
            trace!(x, y, "ignoring out-of-bounds set");
        }
    }

    /// Flip cell at (x, y); out-of-bounds is a no-op
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = self.cells[idx].toggled();
        } else {
            trace!(x, y, "ignoring out-of-bounds toggle");
        }
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize the board (30% chance of alive)
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Live-cell projection in row-major order. Derived from the board
    /// on demand; never an independent source of truth. The rendering
    /// collaborator relies on the stable ordering.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[self.index(x, y)].is_alive() {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(8, 6);
        assert_eq!(board.dimensions(), (8, 6));
        assert!(board.live_cells().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut board = Board::new(5, 5);
        board.toggle(2, 3);
        assert!(board.get(2, 3));
        board.toggle(2, 3);
        assert!(!board.get(2, 3));
    }

    #[test]
    fn test_out_of_range_mutators_are_noops() {
        let mut board = Board::new(4, 4);
        board.set(1, 1, Cell::Alive);
        let before = board.live_cells();

        // The outer edge index equals the extent and must be rejected
        board.set(4, 0, Cell::Alive);
        board.set(0, 4, Cell::Alive);
        board.toggle(4, 4);
        board.toggle(100, 1);

        assert_eq!(board.live_cells(), before);
    }

    #[test]
    fn test_bounds_are_strictly_exclusive() {
        let board = Board::new(4, 4);
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(3, 3));
        assert!(!board.in_bounds(4, 3));
        assert!(!board.in_bounds(3, 4));
        assert!(!board.in_bounds(-1, 0));
    }

    #[test]
    fn test_clear_empties_projection() {
        let mut board = Board::new(6, 6);
        board.set(0, 0, Cell::Alive);
        board.set(5, 5, Cell::Alive);
        board.set(2, 4, Cell::Alive);
        board.clear();
        assert!(board.live_cells().is_empty());
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_live_cells_row_major_order() {
        let mut board = Board::new(5, 5);
        board.set(4, 0, Cell::Alive);
        board.set(0, 2, Cell::Alive);
        board.set(3, 2, Cell::Alive);
        board.set(1, 4, Cell::Alive);
        assert_eq!(board.live_cells(), vec![(4, 0), (0, 2), (3, 2), (1, 4)]);
    }

    #[test]
    fn test_out_of_bounds_get_reads_dead() {
        let board = Board::new(3, 3);
        assert!(!board.get(3, 0));
        assert!(!board.get(0, 3));
    }
}
