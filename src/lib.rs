#![deny(missing_docs)]

//! Solver for right-triangle packing puzzles.
//!
//! A puzzle is a rectangular grid where some cells carry a positive number.
//! Each numbered cell must be covered by exactly one right triangle whose legs
//! are whole numbers of cells, which runs along the grid axes, and whose area
//! equals the number. Triangles may not overlap and may not cover any other
//! numbered cell. The answer to a solved puzzle is the product of all odd
//! horizontal leg lengths.
//!
//! Overlaps are tested on a finer raster: every cell edge is split into
//! `scale` steps and each triangle owns the raster points strictly inside it.
//!
//! ```
//! use triangle_packing::{PuzzleConfig, TargetTable};
//!
//! let targets: TargetTable = "2 0\n0 2".parse()?;
//! let puzzle = PuzzleConfig::new(targets)?;
//!
//! let solutions = puzzle.solver().all_solutions();
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(solutions[0].answer(), Some(1));
//! # Ok::<(), triangle_packing::Error>(())
//! ```

pub mod configuration;
pub mod coord;
mod error;
pub mod options;
pub mod puzzle;
pub mod raster;
pub mod solution;
pub(crate) mod solver;
pub mod target;
pub mod template;
pub(crate) mod util;

pub use configuration::{Configuration, Orientation};
pub use coord::{Cell, RasterPoint};
pub use error::Error;
pub use options::{OptionsIndex, Possibility};
pub use puzzle::PuzzleConfig;
pub use raster::RasterGrid;
pub use solution::{PlacedTriangle, Solution};
pub use solver::{SearchState, SearchStats, Solver};
pub use target::{Target, TargetTable};
pub use template::{Template, TemplateLibrary};

/// Parse a puzzle grid and solve it at the default scale, returning the
/// first solution found.
pub fn solve_str(input: &str) -> Result<Option<Solution>, Error> {
    let puzzle = PuzzleConfig::new(input.parse()?)?;
    let solution = puzzle.solver().next_solution();
    Ok(solution)
}

/// The 17x17 puzzle the solver was first written for, as rows of cell values.
pub const REFERENCE_PUZZLE: [[u32; 17]; 17] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 2, 0, 0, 0],
    [0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 0],
    [4, 0, 0, 0, 0, 10, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5],
    [0, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0, 0, 0, 10, 0, 0, 0],
    [0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 3],
    [0; 17],
    [0, 0, 0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0, 0],
    [0; 17],
    [4, 0, 0, 0, 0, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 18, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0],
    [0, 0, 0, 9, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 0, 0],
    [6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0, 0, 6],
    [0, 0, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0],
    [0, 0, 0, 2, 0, 0, 0, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Return the table of [`REFERENCE_PUZZLE`].
pub fn reference_targets() -> TargetTable {
    match TargetTable::from_rows(REFERENCE_PUZZLE) {
        Ok(table) => table,
        Err(err) => unreachable!("reference puzzle is well formed: {}", err),
    }
}
