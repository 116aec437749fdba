#![no_main]

use libfuzzer_sys::fuzz_target;
use triangle_packing::{PuzzleConfig, SearchState, TargetTable};

// Bounds the work done on a single input.
const MAX_STEPS: usize = 100_000;

#[derive(Debug)]
struct Grid3x3Input {
    rows: [[u32; 3]; 3],
}

impl<'a> arbitrary::Arbitrary<'a> for Grid3x3Input {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut rows = [[0; 3]; 3];
        for (index, value) in u.arbitrary::<[u8; 9]>()?.into_iter().enumerate() {
            rows[index / 3][index % 3] = u32::from(value % 5);
        }

        Ok(Grid3x3Input { rows })
    }
}

fuzz_target!(|data: Grid3x3Input| {
    let targets = TargetTable::from_rows(data.rows).unwrap();
    let puzzle = PuzzleConfig::new(targets).unwrap();
    let mut solver = puzzle.solver();

    for _ in 0..MAX_STEPS {
        match solver.step() {
            SearchState::Solved => {
                let solution = solver.solution().unwrap();
                let mut grid = puzzle.empty_grid();
                for placement in solution.placements() {
                    for point in puzzle.interior_of(placement.target_index, &placement.possibility) {
                        assert!(!grid.is_interior(point));
                        grid.mark_interior(point);
                    }
                    assert!(grid.is_covered(placement.target.cell));
                }
            }
            SearchState::Exhausted => break,
            _ => {}
        }
    }
});
