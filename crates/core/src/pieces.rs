//! Pieces module - Tetromino catalog and generic matrix rotation
//!
//! Every kind has exactly one authored matrix. Other orientations are derived by
//! rotating the matrix 90° clockwise (reverse the rows, then transpose), so the
//! same transform serves the 4x4 I piece, the 2x2 O piece and the 3x3 pieces.
//! There are no wall kicks: a rotation that collides is rejected by the caller.

use crate::types::{Cell, PieceKind, MAX_SHAPE_SIZE};

/// Immutable piece matrix of at most 4x4 cells.
///
/// Cells outside `width x height` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from rows of cell values (0 = empty, 1-7 = piece kind).
    ///
    /// Rows longer than 4 or more than 4 rows are truncated; values above 7 read as empty.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_SHAPE_SIZE);
        let width = rows
            .iter()
            .take(height)
            .map(|row| row.len())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE_SIZE);

        let mut cells = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, &value) in row.iter().take(width).enumerate() {
                cells[y][x] = PieceKind::from_cell_value(value);
            }
        }

        Self {
            cells,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at matrix position `(x, y)`; empty outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        self.cells[y][x]
    }

    /// Non-empty cells as `(dx, dy, kind)` offsets from the matrix origin.
    pub fn minos(&self) -> impl Iterator<Item = (i16, i16, PieceKind)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter_map(move |x| self.cells[y][x].map(|kind| (x as i16, y as i16, kind)))
        })
    }

    /// Rows of numeric cell values, mostly useful for tests and previews.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| crate::types::cell_value(self.cells[y][x]))
                    .collect()
            })
            .collect()
    }
}

/// Rotate a matrix 90° clockwise.
///
/// `new[r][c] = old[h - 1 - c][r]`; the new width is the old height and vice versa.
pub fn rotate(shape: &Shape) -> Shape {
    let old_w = shape.width as usize;
    let old_h = shape.height as usize;

    let mut cells = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for (r, row) in cells.iter_mut().enumerate().take(old_w) {
        for (c, cell) in row.iter_mut().enumerate().take(old_h) {
            *cell = shape.cells[old_h - 1 - c][r];
        }
    }

    Shape {
        cells,
        width: shape.height,
        height: shape.width,
    }
}

/// Get the canonical spawn matrix for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::J => Shape::from_rows(&[&[2, 0, 0], &[2, 2, 2], &[0, 0, 0]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 3], &[3, 3, 3], &[0, 0, 0]]),
        PieceKind::O => Shape::from_rows(&[&[4, 4], &[4, 4]]),
        PieceKind::S => Shape::from_rows(&[&[0, 5, 5], &[5, 5, 0], &[0, 0, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]]),
    }
}
