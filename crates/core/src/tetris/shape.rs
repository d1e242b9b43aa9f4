//! Tetromino shape matrices and clockwise rotation.
//!
//! A shape is a small boolean matrix (at most 4x4). Rotation is a plain
//! 90° clockwise turn of the matrix; there are no wall kicks.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest matrix side any tetromino needs.
pub const MAX_SIDE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values. Extra rows/columns past 4 are dropped.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        let n_rows = rows.len().min(MAX_SIDE);
        let mut n_cols = 0;
        for (r, row) in rows.iter().take(MAX_SIDE).enumerate() {
            n_cols = n_cols.max(row.len().min(MAX_SIDE));
            for (c, &v) in row.iter().take(MAX_SIDE).enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: n_rows as u8,
            cols: n_cols as u8,
            cells,
        }
    }

    /// Spawn orientation for a piece kind.
    pub fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Rotate 90° clockwise: new row `c` is old column `c` read bottom-up.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (c, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (k, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - k][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Offsets `(dx, dy)` of every filled cell, row-major.
    pub fn minos(&self) -> ArrayVec<(i8, i8), { MAX_SIDE * MAX_SIDE }> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }
}
