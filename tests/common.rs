use triangle_packing::{PuzzleConfig, Solution, TargetTable};

/// Install a logger for the current test binary, ignoring repeated calls.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a puzzle at the default scale from grid text.
///
/// # Expected Format
///  - One row per line, cells separated by whitespace
///  - `0` or `.` marks a cell without a target
///  - Lines starting with `#` are ignored
///
/// # Panics
///  - If the grid does not parse or some area has no template
#[allow(dead_code)]
pub fn parse_puzzle(input: &str) -> PuzzleConfig {
    let grid: String = input
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| [line, "\n"])
        .collect();

    log::debug!("Parsing puzzle input [{}].", grid.trim());

    let targets: TargetTable = grid
        .parse()
        .unwrap_or_else(|err| panic!("Unable to parse puzzle [{}]: {}", grid.trim(), err));
    PuzzleConfig::new(targets).unwrap()
}

/// Check a solution against the puzzle rules from scratch.
///
/// # Panics
///  - If some target is uncovered or covered twice
///  - If a triangle has the wrong area, leaves the grid, overlaps another
///    triangle or cuts into another target's cell
///  - If the reported vertices or horizontal legs disagree with the raster
///    geometry
#[allow(dead_code)]
pub fn assert_valid_solution(puzzle: &PuzzleConfig, solution: &Solution) {
    let targets = puzzle.targets();
    let scale = puzzle.scale();
    let mut grid = puzzle.empty_grid();

    assert_eq!(
        solution.placements().len(),
        targets.targets().len(),
        "Every target must be covered exactly once."
    );

    for (idx, placement) in solution.placements().iter().enumerate() {
        assert_eq!(placement.target_index, idx);
        assert_eq!(placement.target, targets.target(idx));

        let (rows, columns) = placement.legs;
        assert_eq!(
            (rows * columns) as u32,
            2 * placement.area(),
            "Triangle over {} has the wrong area.",
            placement.target.cell
        );

        let vertices = puzzle.vertices_of(idx, &placement.possibility);
        assert_eq!(placement.vertices.map(|cell| cell.to_raster(scale)), vertices);
        for vertex in vertices {
            assert!(
                grid.contains(vertex),
                "Triangle over {} leaves the grid at {}.",
                placement.target.cell,
                vertex
            );
        }

        let [right, first, second] = placement.vertices;
        let horizontal_end = if first.row == right.row { first } else { second };
        assert_eq!(
            (horizontal_end.column - right.column).abs(),
            placement.horizontal_leg
        );

        for point in puzzle.interior_of(idx, &placement.possibility) {
            assert!(
                !grid.is_interior(point),
                "Triangle over {} overlaps another triangle at {}.",
                placement.target.cell,
                point
            );

            if let Some(owner) = point
                .containing_cell(scale)
                .and_then(|cell| targets.target_at(cell))
            {
                assert_eq!(
                    owner, idx,
                    "Triangle over {} cuts into another target's cell at {}.",
                    placement.target.cell, point
                );
            }

            grid.mark_interior(point);
        }

        assert!(grid.is_covered(placement.target.cell));
    }

    let expected_answer = solution
        .placements()
        .iter()
        .map(|placement| placement.horizontal_leg)
        .filter(|leg| leg % 2 == 1)
        .map(|leg| leg as u128)
        .product::<u128>();
    assert_eq!(solution.answer(), Some(expected_answer));
}
