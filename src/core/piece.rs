//! Piece module - the active falling piece

use crate::core::grid::Grid;
use crate::core::shape::Shape;

/// A shape plus its offset on the grid. Coordinates are signed so a
/// candidate position may lie outside the field while being tested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    /// Check whether the piece overlaps settled material or leaves the
    /// grid. Every occupied shape cell is evaluated; out-of-bounds cells
    /// count as hits, so the floor and both walls block.
    pub fn collides(&self, grid: &Grid) -> bool {
        self.shape
            .occupied_cells()
            .any(|(sx, sy)| !grid.is_free(self.x + sx as i32, self.y + sy as i32))
    }
}
