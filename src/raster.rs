//! Dense occupancy bitmap over raster space.
//!
//! A [`RasterGrid`] is one search-state snapshot: it records which raster
//! points are interior to some already placed triangle. Snapshots are cheap
//! to clone and are never shared mutably, so the solver keeps a stack of
//! them and undoes a decision by dropping the top one.

use crate::coord::{Cell, RasterPoint};

/// Occupancy of every raster point of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterGrid {
    num_rows: usize,
    num_columns: usize,
    scale: i32,

    interior: Vec<bool>,
}

impl RasterGrid {
    #[inline]
    fn to_index(row: usize, column: usize, num_columns: usize) -> usize {
        row * num_columns + column
    }

    /// Create an empty raster grid covering `cell_rows` × `cell_columns`
    /// puzzle cells at the given scale.
    ///
    /// The grid has `cell_rows * scale + 1` rows of points, so every grid line
    /// of the puzzle is addressable.
    pub fn new(cell_rows: usize, cell_columns: usize, scale: i32) -> Self {
        assert!(scale > 0, "Raster scale must be positive.");

        let scale_len = scale as usize;
        let num_rows = cell_rows * scale_len + 1;
        let num_columns = cell_columns * scale_len + 1;

        RasterGrid {
            num_rows,
            num_columns,
            scale,
            interior: vec![false; num_rows * num_columns],
        }
    }

    /// Return the number of raster rows (points, not cells).
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Return the number of raster columns (points, not cells).
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Return the raster scale this grid was built with.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    fn index(&self, point: RasterPoint) -> Option<usize> {
        let row = usize::try_from(point.row).ok()?;
        let column = usize::try_from(point.column).ok()?;

        if row < self.num_rows && column < self.num_columns {
            Some(Self::to_index(row, column, self.num_columns))
        } else {
            None
        }
    }

    /// Return true if the point lies on the grid, boundary included.
    pub fn contains(&self, point: RasterPoint) -> bool {
        self.index(point).is_some()
    }

    /// Return true if the point is interior to a placed triangle.
    ///
    /// Points outside the grid are never interior.
    pub fn is_interior(&self, point: RasterPoint) -> bool {
        self.index(point).map_or(false, |idx| self.interior[idx])
    }

    /// Mark the point as interior to a placed triangle.
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the grid.
    pub fn mark_interior(&mut self, point: RasterPoint) {
        let idx = self
            .index(point)
            .unwrap_or_else(|| panic!("Raster point {} lies outside the grid.", point));
        self.interior[idx] = true;
    }

    /// Return true if the given puzzle cell is covered by a placed triangle.
    pub fn is_covered(&self, cell: Cell) -> bool {
        self.is_interior(cell.inner_raster(self.scale))
    }

    /// Return the number of points marked interior.
    pub fn interior_count(&self) -> usize {
        self.interior.iter().filter(|marked| **marked).count()
    }
}
