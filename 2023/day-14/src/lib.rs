//! Day 14: Parabolic Reflector Dish.
//!
//! Rounded rocks roll across a platform of fixed cube rocks. Part one tilts
//! the platform north once; part two spins it a billion times, which only
//! works by finding where the spin cycles start repeating.

use miette::*;
use std::path::Path;

pub mod cycle;
pub mod error;
pub mod grid;
pub mod part1;
pub mod part2;
pub mod score;
pub mod tilt;

pub use cycle::{detect_cycle, fast_forward, Cycle};
pub use grid::{Axis, Cell, Direction, Grid};
pub use tilt::{spin_cycle, tilt, Heading};

/// Puzzle day served by this crate.
pub const DAY: u32 = 14;

/// Solves both parts for the input file at `path`.
#[tracing::instrument]
pub fn run(path: &Path) -> Result<(usize, usize)> {
    let lines = aoc2023_common::read_lines(path)?;
    let grid = Grid::from_lines(&lines)?;

    let first = part1::solve(grid.clone())?;
    let second = part2::solve(grid, part2::SPIN_TARGET)?;
    Ok((first, second))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const EXAMPLE: &str = "O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

    #[test]
    fn runs_both_parts_from_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("aoc2023-d14-{}.txt", std::process::id()));
        std::fs::write(&path, format!("{EXAMPLE}\n")).into_diagnostic()?;
        let result = run(&path);
        std::fs::remove_file(&path).into_diagnostic()?;
        assert_eq!((136, 64), result?);
        Ok(())
    }

    #[test]
    fn malformed_file_yields_no_answer() -> Result<()> {
        let path = std::env::temp_dir().join(format!("aoc2023-d14-bad-{}.txt", std::process::id()));
        std::fs::write(&path, "O..\n.O\n").into_diagnostic()?;
        let result = run(&path);
        std::fs::remove_file(&path).into_diagnostic()?;
        assert!(result.is_err());
        Ok(())
    }
}
