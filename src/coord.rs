//! Coordinates in the two spaces used by the solver.
//!
//! A [`Cell`] addresses the puzzle grid (and, when used for triangle
//! vertices, the grid lines between cells). A [`RasterPoint`] addresses the
//! finer raster lattice obtained by subdividing every cell edge into `scale`
//! steps. The two types never convert implicitly.

use core::{
    fmt,
    ops::{Add, Sub},
};

/// A position in puzzle-cell space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    /// The row index, growing downwards.
    pub row: i32,
    /// The column index, growing to the right.
    pub column: i32,
}

impl Cell {
    /// Create a new cell coordinate.
    pub const fn new(row: i32, column: i32) -> Self {
        Cell { row, column }
    }

    /// Return the raster point at the top-left corner of this cell.
    pub fn to_raster(self, scale: i32) -> RasterPoint {
        RasterPoint::new(self.row * scale, self.column * scale)
    }

    /// Return the raster point just inside the top-left corner of this cell.
    ///
    /// Any triangle covering the cell has this point in its interior.
    pub fn inner_raster(self, scale: i32) -> RasterPoint {
        RasterPoint::new(self.row * scale + 1, self.column * scale + 1)
    }

    pub(crate) fn swapped(self) -> Self {
        Cell::new(self.column, self.row)
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.row + rhs.row, self.column + rhs.column)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.row - rhs.row, self.column - rhs.column)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A position in raster space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RasterPoint {
    /// The raster row index.
    pub row: i32,
    /// The raster column index.
    pub column: i32,
}

impl RasterPoint {
    /// Create a new raster coordinate.
    pub const fn new(row: i32, column: i32) -> Self {
        RasterPoint { row, column }
    }

    /// Return the grid-line intersection this point sits on, or `None` if
    /// either coordinate is not a multiple of `scale`.
    pub fn to_cell(self, scale: i32) -> Option<Cell> {
        if self.row % scale == 0 && self.column % scale == 0 {
            Some(Cell::new(self.row / scale, self.column / scale))
        } else {
            None
        }
    }

    /// Return the cell whose open interior contains this point, or `None` if
    /// the point lies on a grid line.
    pub fn containing_cell(self, scale: i32) -> Option<Cell> {
        if self.row % scale == 0 || self.column % scale == 0 {
            None
        } else {
            Some(Cell::new(
                self.row.div_euclid(scale),
                self.column.div_euclid(scale),
            ))
        }
    }

    pub(crate) fn swapped(self) -> Self {
        RasterPoint::new(self.column, self.row)
    }
}

impl Add for RasterPoint {
    type Output = RasterPoint;

    fn add(self, rhs: RasterPoint) -> RasterPoint {
        RasterPoint::new(self.row + rhs.row, self.column + rhs.column)
    }
}

impl Sub for RasterPoint {
    type Output = RasterPoint;

    fn sub(self, rhs: RasterPoint) -> RasterPoint {
        RasterPoint::new(self.row - rhs.row, self.column - rhs.column)
    }
}

impl fmt::Display for RasterPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}
