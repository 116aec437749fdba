//! Run the triangle packing solver
//! Usage:
//!
//! ```bash
//! cargo run --release --example triangles [puzzle-file] [--all]
//! ```
//!
//! Without a file the built-in 17x17 puzzle is solved. The file holds one row
//! per line with whitespace-separated areas, `0` or `.` for empty cells.

use std::{error::Error, fs};
use triangle_packing::{reference_targets, PuzzleConfig, TargetTable};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let all = args.iter().any(|arg| arg == "--all");
    let path = args.iter().find(|arg| !arg.starts_with("--"));

    let targets: TargetTable = match path {
        Some(path) => fs::read_to_string(path)?.parse()?,
        None => reference_targets(),
    };
    let puzzle = PuzzleConfig::new(targets)?;
    let mut solver = puzzle.solver();

    let mut found = 0;
    while let Some(solution) = solver.next_solution() {
        found += 1;
        println!("solution {}:\n{}\n", found, solution);
        if !all {
            break;
        }
    }

    let stats = solver.stats();
    println!(
        "{} solution(s), {} placements, {} backtracks, {} dead ends",
        found, stats.placements, stats.backtracks, stats.dead_ends
    );

    Ok(())
}
