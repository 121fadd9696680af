use miette::*;

use crate::error;
use crate::grid::Grid;
use crate::score::north_load;
use crate::tilt::{tilt_platform, Heading};

/// Load after a single tilt to the north.
pub fn solve(mut grid: Grid) -> error::Result<usize> {
    tilt_platform(&mut grid, Heading::North)?;
    Ok(north_load(&grid))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;
    Ok(solve(grid)?.to_string())
}
