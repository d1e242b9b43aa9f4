//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or hold the kind of
//! the piece that locked there. Uses a flat array for cache locality and
//! zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (negative y) are open space: they never collide.

use crate::tetris::shape::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True if `shape` placed with its top-left at `(x, y)` leaves the
    /// columns, drops below the last row, or overlaps a locked cell.
    ///
    /// Cells above row 0 are allowed.
    pub fn collides(&self, x: i8, y: i8, shape: &Shape) -> bool {
        shape.minos().iter().any(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write a piece's cells into the board. Cells above row 0 are dropped.
    pub fn merge(&mut self, x: i8, y: i8, shape: &Shape, kind: PieceKind) {
        for &(dx, dy) in shape.minos().iter() {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow a single row.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Remove every full row, shift the rows above down, and return how many
    /// rows were removed.
    ///
    /// Two-pointer compaction from the bottom up; surviving rows keep their
    /// relative order and empty rows appear at the top.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn collides_ignores_rows_above_board() {
        let board = Board::new();
        let o = Shape::spawn(PieceKind::O);
        assert!(!board.collides(4, -2, &o));
        assert!(!board.collides(4, -10, &o));
    }

    #[test]
    fn collides_with_walls_and_floor() {
        let board = Board::new();
        let o = Shape::spawn(PieceKind::O);
        assert!(board.collides(-1, 0, &o));
        assert!(board.collides(9, 0, &o));
        assert!(board.collides(0, 19, &o));
        assert!(!board.collides(8, 18, &o));
    }

    #[test]
    fn collides_with_locked_cells() {
        let mut board = Board::new();
        board.set(5, 10, Some(PieceKind::T));
        let o = Shape::spawn(PieceKind::O);
        assert!(board.collides(4, 9, &o));
        assert!(!board.collides(6, 9, &o));
    }

    #[test]
    fn merge_drops_cells_above_board() {
        let mut board = Board::new();
        let i = Shape::spawn(PieceKind::I).rotate_cw();
        board.merge(0, -2, &i, PieceKind::I);
        assert_eq!(board.filled_count(), 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(0, 1));
    }

    #[test]
    fn clear_full_rows_keeps_order() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        board.set(3, 18, Some(PieceKind::T));
        fill_row(&mut board, 17, PieceKind::O);
        board.set(7, 16, Some(PieceKind::Z));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(7, 18), Some(Some(PieceKind::Z)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn clear_without_full_rows_is_noop() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L));
        let before = board.clone();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }
}
