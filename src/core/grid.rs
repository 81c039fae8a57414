//! Grid module - the settled play field
//!
//! A `width x height` field of cells in a flat row-major vector.
//! Coordinates are (x, y) with x running left to right and y top to
//! bottom. Every lookup is bounds-checked: positions outside the field
//! read as `None`, never panic. Dimensions are fixed at construction.

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat cell storage, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Dimension validation happens in
    /// [`GameConfig::validate`](crate::core::GameConfig::validate).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y). Returns `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if a position can host piece material: within bounds and
    /// empty. Out-of-bounds is never free, so the floor and both walls
    /// block the collision test.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].iter().all(|&c| c)
    }

    /// Indices of all completely filled rows, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove row y and insert a fresh empty row at the top.
    /// Rows 0..y shift down by one; rows below y and the grid
    /// dimensions are untouched.
    pub fn remove_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }

        // Shift the rows above down by one. copy_within handles the
        // overlapping ranges.
        for row in (1..=y).rev() {
            let src = (row - 1) * self.width;
            let dst = row * self.width;
            self.cells.copy_within(src..src + self.width, dst);
        }

        for cell in &mut self.cells[..self.width] {
            *cell = false;
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Flat view of the cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
