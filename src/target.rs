//! The fixed puzzle input: a rectangular grid where positive numbers mark
//! the cells that must be covered by a triangle of that area.

use crate::{coord::Cell, error::Error};
use std::{collections::BTreeSet, str::FromStr};

/// A numbered cell that must be covered by exactly one triangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target {
    /// The cell holding the number.
    pub cell: Cell,
    /// The area the covering triangle must have.
    pub area: u32,
}

/// The numbers of a puzzle, indexed both by cell and by target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTable {
    num_rows: usize,
    num_columns: usize,

    areas: Vec<u32>,
    targets: Vec<Target>,
    target_index: Vec<Option<usize>>,
}

impl TargetTable {
    /// Build a table from rows of cell values, `0` meaning "no target".
    ///
    /// Targets are enumerated in row-major order.
    pub fn from_rows<R: AsRef<[u32]>>(rows: impl IntoIterator<Item = R>) -> Result<Self, Error> {
        let mut areas = Vec::new();
        let mut num_rows = 0;
        let mut num_columns = 0;

        for (row_idx, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if row_idx == 0 {
                num_columns = row.len();
            } else if row.len() != num_columns {
                return Err(Error::RaggedRow {
                    row: row_idx,
                    expected: num_columns,
                    found: row.len(),
                });
            }
            areas.extend_from_slice(row);
            num_rows += 1;
        }

        if num_rows == 0 || num_columns == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut targets = Vec::new();
        let mut target_index = vec![None; areas.len()];
        for (idx, &area) in areas.iter().enumerate() {
            if area > 0 {
                target_index[idx] = Some(targets.len());
                targets.push(Target {
                    cell: Cell::new((idx / num_columns) as i32, (idx % num_columns) as i32),
                    area,
                });
            }
        }

        log::debug!(
            "Read {}x{} puzzle grid with {} targets.",
            num_rows,
            num_columns,
            targets.len()
        );

        Ok(TargetTable {
            num_rows,
            num_columns,
            areas,
            targets,
            target_index,
        })
    }

    /// Return the number of cell rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Return the number of cell columns.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Return all targets in row-major order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Return the target with the given index.
    pub fn target(&self, index: usize) -> Target {
        self.targets[index]
    }

    /// Return true if the cell lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.num_rows as i32).contains(&cell.row)
            && (0..self.num_columns as i32).contains(&cell.column)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.num_columns + cell.column as usize)
        } else {
            None
        }
    }

    /// Return the value written in a cell, `0` for unnumbered or off-grid
    /// cells.
    pub fn area_at(&self, cell: Cell) -> u32 {
        self.index(cell).map_or(0, |idx| self.areas[idx])
    }

    /// Return the index of the target at the given cell, if any.
    pub fn target_at(&self, cell: Cell) -> Option<usize> {
        self.index(cell).and_then(|idx| self.target_index[idx])
    }

    /// Return every distinct target area.
    pub fn distinct_areas(&self) -> BTreeSet<u32> {
        self.targets.iter().map(|target| target.area).collect()
    }
}

/// Parse a grid written as whitespace-separated non-negative integers, one
/// row per line. `.` may be used instead of `0`; blank lines are skipped.
impl FromStr for TargetTable {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split_whitespace()
                    .enumerate()
                    .map(|(column, token)| match token {
                        "." => Ok(0),
                        _ => token.parse::<u32>().map_err(|_| Error::InvalidValue {
                            row,
                            column,
                            token: token.to_owned(),
                        }),
                    })
                    .collect::<Result<Vec<u32>, Error>>()
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Self::from_rows(rows)
    }
}
