//! Grid extent

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row and column count of a raster grid.
///
/// Extents are compared and intersected per axis; no georeferencing is
/// involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Extent {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether (row, col) lies inside this extent
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Per-axis minimum of two extents.
    ///
    /// Both grids are anchored at (0, 0), so this is their overlap. Disjoint
    /// extents cannot occur; a zero on either axis yields an empty extent.
    pub fn intersection(&self, other: &Extent) -> Extent {
        Extent::new(self.rows.min(other.rows), self.cols.min(other.cols))
    }

    /// Dimensions as (rows, cols)
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Extent {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
