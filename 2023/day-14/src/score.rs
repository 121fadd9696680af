use crate::grid::{Cell, Grid};

/// Load on the north support beams: each movable cell weighs as many rows as
/// it sits above the south edge, its own row included.
pub fn north_load(grid: &Grid) -> usize {
    grid.cells()
        .filter(|&(_, _, cell)| cell == Cell::Movable)
        .map(|(row, _, _)| grid.rows() - row)
        .sum()
}
