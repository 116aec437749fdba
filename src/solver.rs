use crate::{
    options::OptionsIndex,
    puzzle::PuzzleConfig,
    raster::RasterGrid,
    solution::Solution,
};

/// The phase the search is in.
///
/// Each call to [`Solver::step`] performs the work of the current phase and
/// moves to the next one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Refresh the options of every uncovered target and pick the next one to
    /// decide.
    Selecting,
    /// Commit the last remaining option of the given target.
    Placing(usize),
    /// Undo decisions until one with an untried option is found.
    Backtracking,
    /// Every target is covered; the current decisions form a solution.
    Solved,
    /// No decision has untried options left.
    Exhausted,
}

/// Counters describing the work a solver has done.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Number of triangles committed.
    pub placements: u64,
    /// Number of decisions undone.
    pub backtracks: u64,
    /// Number of times some uncovered target had no option left.
    pub dead_ends: u64,
    /// Number of solutions found.
    pub solutions: u64,
}

/// Solver that iteratively returns solutions to a triangle packing puzzle.
#[derive(Debug)]
pub struct Solver<'p> {
    puzzle: &'p PuzzleConfig,

    // Values used to track the state of solving
    stack: Vec<RasterGrid>,
    decisions: Vec<usize>,
    options: OptionsIndex,
    state: SearchState,
    stats: SearchStats,
}

impl<'p> Solver<'p> {
    /// Create a new `Solver` for the given puzzle.
    pub fn new(puzzle: &'p PuzzleConfig) -> Self {
        Solver {
            puzzle,

            stack: vec![puzzle.empty_grid()],
            decisions: Vec::new(),
            options: OptionsIndex::new(puzzle.targets().targets().len()),
            state: SearchState::Selecting,
            stats: SearchStats::default(),
        }
    }

    /// Reset all solver state, starting the search over.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
        if let Some(base) = self.stack.first_mut() {
            *base = self.puzzle.empty_grid();
        }
        self.decisions.clear();
        self.options.clear();
        self.state = SearchState::Selecting;
        self.stats = SearchStats::default();
    }

    /// The phase the next call to [`step`](Self::step) will perform.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Counters accumulated since the solver was created or reset.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The targets decided so far, in the order they were decided.
    pub fn decisions(&self) -> &[usize] {
        &self.decisions
    }

    /// The snapshot with every current decision placed.
    pub fn snapshot(&self) -> &RasterGrid {
        &self.stack[self.stack.len() - 1]
    }

    /// Perform one transition of the search and return the new state.
    ///
    /// Once [`SearchState::Exhausted`] is reached the solver stays there.
    pub fn step(&mut self) -> SearchState {
        self.state = match self.state {
            SearchState::Selecting => self.select(),
            SearchState::Placing(target) => self.place(target),
            SearchState::Backtracking | SearchState::Solved => self.backtrack(),
            SearchState::Exhausted => SearchState::Exhausted,
        };

        self.state
    }

    /// Refresh the options of the uncovered targets and choose the one with
    /// the largest area, the last in row-major order on ties.
    fn select(&mut self) -> SearchState {
        let grid = &self.stack[self.stack.len() - 1];
        let mut selected: Option<(usize, u32)> = None;

        for (idx, target) in self.puzzle.targets().targets().iter().enumerate() {
            if !self.options.recompute(self.puzzle, grid, idx) {
                continue;
            }

            if self.options.remaining(idx) == 0 {
                self.stats.dead_ends += 1;
                log::trace!(
                    "Target at {} has no placement at depth {}.",
                    target.cell,
                    self.decisions.len()
                );
                return SearchState::Backtracking;
            }

            if selected.map_or(true, |(_, area)| target.area >= area) {
                selected = Some((idx, target.area));
            }
        }

        match selected {
            Some((idx, _)) => SearchState::Placing(idx),
            None => {
                self.stats.solutions += 1;
                log::debug!(
                    "Found solution {} after {} placements.",
                    self.stats.solutions,
                    self.stats.placements
                );
                SearchState::Solved
            }
        }
    }

    /// Commit the last option of `target` on top of the current snapshot.
    fn place(&mut self, target: usize) -> SearchState {
        let possibility = match self.options.last(target) {
            Some(possibility) => *possibility,
            None => return SearchState::Backtracking,
        };

        let next = self.puzzle.place(self.snapshot(), target, &possibility);
        let cell = self.puzzle.targets().target(target).cell;
        if !next.is_covered(cell) {
            self.options.discard_last(target);
            self.stats.dead_ends += 1;
            log::trace!(
                "Placement {:?} leaves target at {} uncovered.",
                self.puzzle.library().get(possibility.template).legs(),
                cell
            );
            return if self.options.remaining(target) > 0 {
                SearchState::Placing(target)
            } else {
                SearchState::Backtracking
            };
        }

        self.stack.push(next);
        self.decisions.push(target);
        self.stats.placements += 1;

        log::trace!(
            "Placed {:?} over {} at depth {}.",
            self.puzzle.library().get(possibility.template).legs(),
            cell,
            self.decisions.len()
        );

        SearchState::Selecting
    }

    /// Undo the most recent decisions until one of them has another option.
    fn backtrack(&mut self) -> SearchState {
        while let Some(target) = self.decisions.pop() {
            self.stack.pop();
            self.options.discard_last(target);
            self.stats.backtracks += 1;

            if self.options.remaining(target) > 0 {
                log::trace!(
                    "Retrying target {} with {} options left at depth {}.",
                    self.puzzle.targets().target(target).cell,
                    self.options.remaining(target),
                    self.decisions.len()
                );
                return SearchState::Placing(target);
            }
        }

        log::debug!(
            "Search exhausted after {} placements and {} backtracks.",
            self.stats.placements,
            self.stats.backtracks
        );
        SearchState::Exhausted
    }

    /// Return the solution formed by the current decisions, if the last step
    /// reached [`SearchState::Solved`].
    pub fn solution(&self) -> Option<Solution> {
        if self.state != SearchState::Solved {
            return None;
        }

        Some(Solution::new(
            self.decisions
                .iter()
                .filter_map(|&target| {
                    self.options
                        .last(target)
                        .map(|possibility| self.puzzle.placed_triangle(target, possibility))
                })
                .collect(),
        ))
    }

    /// Return all remaining solutions.
    pub fn all_solutions(&mut self) -> Vec<Solution> {
        self.collect()
    }

    /// Compute up to the next solution, returning `None` if there are no more.
    pub fn next_solution(&mut self) -> Option<Solution> {
        loop {
            match self.step() {
                SearchState::Solved => return self.solution(),
                SearchState::Exhausted => return None,
                _ => {}
            }
        }
    }
}

impl<'p> Iterator for Solver<'p> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}
