//! Complete placements and the answer derived from them.

use crate::{coord::Cell, options::Possibility, target::Target};
use std::fmt;

/// A triangle committed over one target, described in cell units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlacedTriangle {
    /// Index of the covered target, in row-major order.
    pub target_index: usize,
    /// The covered target.
    pub target: Target,
    /// Leg lengths `(rows, columns)` of the template before orientation.
    pub legs: (i32, i32),
    /// The template and configuration used.
    pub possibility: Possibility,
    /// The right-angle vertex followed by the ends of the two legs, as grid
    /// points.
    pub vertices: [Cell; 3],
    /// Length of the leg running along the column axis.
    pub horizontal_leg: i32,
}

impl PlacedTriangle {
    /// Return the area of the triangle.
    pub fn area(&self) -> u32 {
        self.target.area
    }
}

impl fmt::Display for PlacedTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [right, first, second] = self.vertices;
        write!(
            f,
            "{} area {}: legs {}x{}, vertices {} {} {}, horizontal leg {}",
            self.target.cell,
            self.target.area,
            self.legs.0,
            self.legs.1,
            right,
            first,
            second,
            self.horizontal_leg
        )
    }
}

/// One triangle per target, with no two triangles overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    placements: Vec<PlacedTriangle>,
}

impl Solution {
    /// Create a solution from its placements, ordering them by target.
    pub fn new(mut placements: Vec<PlacedTriangle>) -> Self {
        placements.sort_by_key(|placement| placement.target_index);
        Solution { placements }
    }

    /// Return the placements in target order.
    pub fn placements(&self) -> &[PlacedTriangle] {
        &self.placements
    }

    /// Return the placement covering the target at `cell`, if any.
    pub fn placement_at(&self, cell: Cell) -> Option<&PlacedTriangle> {
        self.placements
            .iter()
            .find(|placement| placement.target.cell == cell)
    }

    /// Return the product of all odd horizontal leg lengths, `1` if there are
    /// none.
    ///
    /// Returns `None` if the product does not fit in a `u128`.
    pub fn answer(&self) -> Option<u128> {
        self.placements
            .iter()
            .map(|placement| placement.horizontal_leg)
            .filter(|leg| leg % 2 != 0)
            .try_fold(1u128, |product, leg| {
                product.checked_mul(u128::from(leg.unsigned_abs()))
            })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for placement in &self.placements {
            writeln!(f, "{}", placement)?;
        }

        match self.answer() {
            Some(answer) => write!(f, "answer: {}", answer),
            None => write!(f, "answer: overflow"),
        }
    }
}
