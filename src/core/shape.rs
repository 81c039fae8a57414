//! Shape module - piece templates and rotation
//!
//! A shape is a rectangular boolean matrix in flat row-major storage.
//! The catalog holds the seven templates in spawn orientation; rotation
//! produces a new shape a quarter turn clockwise with transposed
//! dimensions, so a piece never mutates in place.

use arrayvec::ArrayVec;

/// Capacity for shape cells: no template exceeds a 4x4 bounding box in
/// any orientation.
const MAX_SHAPE_CELLS: usize = 16;

/// Piece templates in spawn orientation, as 0/1 row masks
pub const CATALOG: [&[&[u8]]; 7] = [
    // I
    &[&[1, 1, 1, 1]],
    // O
    &[&[1, 1], &[1, 1]],
    // T
    &[&[0, 1, 0], &[1, 1, 1]],
    // S
    &[&[0, 1, 1], &[1, 1, 0]],
    // Z
    &[&[1, 1, 0], &[0, 1, 1]],
    // J
    &[&[1, 0, 0], &[1, 1, 1]],
    // L
    &[&[0, 0, 1], &[1, 1, 1]],
];

/// A rectangular piece shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Flat cell mask, row-major order (y * width + x)
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from nested 0/1 rows. Rows must share one length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map_or(0, |row| row.len()) as u8;
        let mut cells = ArrayVec::new();
        for row in rows {
            for &v in *row {
                cells.push(v != 0);
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Shape for catalog template `index`
    pub fn from_catalog(index: usize) -> Self {
        Self::from_rows(CATALOG[index])
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether (x, y) is part of the piece. Out-of-range reads as empty.
    pub fn at(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// The shape a quarter turn clockwise: row i of the result is column
    /// i of the original read bottom to top. Dimensions transpose.
    pub fn rotated(&self) -> Self {
        let width = self.height;
        let height = self.width;
        let mut cells = ArrayVec::new();
        for y in 0..height {
            for x in 0..width {
                cells.push(self.at(y, self.height - 1 - x));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Iterate occupied cell offsets as (x, y) pairs, row by row
    pub fn occupied_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.at(x, y))
                .map(move |x| (x, y))
        })
    }
}
