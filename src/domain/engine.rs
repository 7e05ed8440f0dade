//! Generation transition for the fixed B3/S23 rule.
//!
//! `step` is a pure function over a board snapshot: same input board,
//! same output board, no shared state. The grid is a hard-edged
//! rectangle - positions outside the bounds simply do not count as
//! neighbors (no toroidal wrap).

use super::{Board, Cell};
use rayon::prelude::*;

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live neighbors among the 8 surrounding positions with
/// explicit boundary checks
fn count_live_neighbors(board: &Board, x: usize, y: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            board.in_bounds(nx, ny) && board.get(nx as usize, ny as usize)
        })
        .count() as u8
}

fn evolve_at(board: &Board, x: usize, y: usize) -> Cell {
    let current = if board.get(x, y) { Cell::Alive } else { Cell::Dead };
    current.evolve(count_live_neighbors(board, x, y))
}

/// Compute the next generation (serial). O(rows * cols) with constant
/// 8-neighbor work per cell; the input board is untouched.
pub fn step(board: &Board) -> Board {
    let (width, height) = board.dimensions();
    let cells = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| evolve_at(board, x, y))
        .collect();
    Board::from_cells(width, height, cells)
}

/// Parallel next generation using rayon over rows.
/// Output is bit-identical to `step`; worthwhile for grids > 100x100.
pub fn step_parallel(board: &Board) -> Board {
    let (width, height) = board.dimensions();
    let cells: Vec<Cell> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| evolve_at(board, x, y))
        .collect();
    Board::from_cells(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(width: usize, height: usize, live: &[(usize, usize)]) -> Board {
        let mut board = Board::new(width, height);
        for &(x, y) in live {
            board.set(x, y, Cell::Alive);
        }
        board
    }

    #[test]
    fn test_step_is_deterministic() {
        let board = board_with(10, 10, &[(2, 2), (3, 2), (4, 2), (4, 3), (3, 4)]);
        let a = step(&board);
        let b = step(&board);
        assert_eq!(a.live_cells(), b.live_cells());
        // Input snapshot untouched
        assert_eq!(board.live_cells(), vec![(2, 2), (3, 2), (4, 2), (4, 3), (3, 4)]);
    }

    #[test]
    fn test_block_is_fixed_point() {
        let board = board_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let next = step(&board);
        assert_eq!(next.live_cells(), board.live_cells());
    }

    #[test]
    fn test_blinker_oscillates_period_two() {
        let horizontal = vec![(1, 2), (2, 2), (3, 2)];
        let board = board_with(5, 5, &horizontal);

        let once = step(&board);
        assert_eq!(once.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);

        let twice = step(&once);
        assert_eq!(twice.live_cells(), horizontal);
    }

    #[test]
    fn test_glider_translates_by_one_one_after_four_steps() {
        let glider = vec![(3, 2), (4, 3), (2, 4), (3, 4), (4, 4)];
        let mut board = board_with(12, 12, &glider);
        for _ in 0..4 {
            board = step(&board);
        }
        let expected: Vec<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        let mut moved = board.live_cells();
        moved.sort();
        let mut expected_sorted = expected;
        expected_sorted.sort();
        assert_eq!(moved, expected_sorted);
    }

    #[test]
    fn test_edges_are_hard_not_toroidal() {
        // A blinker lying along the top edge: the off-grid row above
        // contributes nothing, so the cell above the center is born
        // while the edge endpoints die.
        let board = board_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        let next = step(&board);
        assert_eq!(next.live_cells(), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_lone_corner_cell_dies() {
        let board = board_with(4, 4, &[(0, 0)]);
        assert!(step(&board).live_cells().is_empty());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut board = Board::new(64, 48);
        board.randomize();
        let serial = step(&board);
        let parallel = step_parallel(&board);
        assert_eq!(serial.live_cells(), parallel.live_cells());
    }
}
