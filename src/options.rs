//! Candidate placements per target.

use crate::{configuration::Configuration, puzzle::PuzzleConfig, raster::RasterGrid};

/// One way of covering a target: a template from the library laid out in a
/// given configuration.
///
/// Whether a possibility is legal depends on the snapshot it is checked
/// against, so possibilities are candidates until re-validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Possibility {
    /// Index of the template in the [`TemplateLibrary`](crate::TemplateLibrary).
    pub template: usize,
    /// How the template is laid over the target.
    pub configuration: Configuration,
}

/// For every target, the possibilities that fit the snapshot the target was
/// last examined against.
///
/// Entries of targets that are already covered are left alone, so the
/// entry of a committed decision keeps the alternatives still to be tried.
#[derive(Debug, Clone, Default)]
pub struct OptionsIndex {
    entries: Vec<Vec<Possibility>>,
}

impl OptionsIndex {
    /// Create an index with an empty entry for each of `num_targets`
    /// targets.
    pub fn new(num_targets: usize) -> Self {
        OptionsIndex {
            entries: vec![Vec::new(); num_targets],
        }
    }

    /// Recompute the entry of `target` against `grid`.
    ///
    /// Returns false and leaves the entry untouched if the target is already
    /// covered in `grid`.
    pub fn recompute(&mut self, puzzle: &PuzzleConfig, grid: &RasterGrid, target: usize) -> bool {
        let cell = puzzle.targets().target(target).cell;
        if grid.is_covered(cell) {
            return false;
        }

        self.entries[target] = puzzle.possibilities(grid, target);
        true
    }

    /// Return the current possibilities of `target`, in enumeration order.
    pub fn get(&self, target: usize) -> &[Possibility] {
        &self.entries[target]
    }

    /// Return the possibility that will be tried next for `target`.
    pub fn last(&self, target: usize) -> Option<&Possibility> {
        self.entries[target].last()
    }

    /// Drop the possibility most recently tried for `target`.
    pub fn discard_last(&mut self, target: usize) -> Option<Possibility> {
        self.entries[target].pop()
    }

    /// Return the number of possibilities left for `target`.
    pub fn remaining(&self, target: usize) -> usize {
        self.entries[target].len()
    }

    /// Empty every entry.
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(Vec::clear);
    }
}
