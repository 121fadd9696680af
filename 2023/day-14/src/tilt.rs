use crate::error::Result;
use crate::grid::{Axis, Cell, Direction, Grid};

/// Direction the platform is tilted towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    West,
    South,
    East,
}

impl Heading {
    /// One spin cycle, in order.
    pub const SPIN_CYCLE: [Heading; 4] = [Self::North, Self::West, Self::South, Self::East];

    /// The lines rocks roll along, read so that rocks roll towards index 0.
    pub fn lines(self) -> (Axis, Direction) {
        match self {
            Heading::North => (Axis::Column, Direction::Forward),
            Heading::West => (Axis::Row, Direction::Forward),
            Heading::South => (Axis::Column, Direction::Reverse),
            Heading::East => (Axis::Row, Direction::Reverse),
        }
    }
}

/// Rolls every movable cell towards the start of `line`, stopping at fixed
/// cells. Movable cells keep their relative order within each segment.
pub fn tilt(line: &[Cell]) -> Vec<Cell> {
    let mut tilted = vec![Cell::Empty; line.len()];
    let mut free = 0;

    for (i, &cell) in line.iter().enumerate() {
        match cell {
            Cell::Empty => {}
            Cell::Movable => {
                tilted[free] = Cell::Movable;
                free += 1;
            }
            Cell::Fixed => {
                tilted[i] = Cell::Fixed;
                free = i + 1;
            }
        }
    }

    tilted
}

/// Tilts every line of the grid towards `heading`.
pub fn tilt_platform(grid: &mut Grid, heading: Heading) -> Result<()> {
    let (axis, direction) = heading.lines();
    for index in 0..grid.line_count(axis) {
        let tilted = tilt(&grid.line(axis, index, direction)?);
        grid.set_line(axis, index, direction, &tilted)?;
    }
    Ok(())
}

pub fn spin_cycle(grid: &mut Grid) -> Result<()> {
    for heading in Heading::SPIN_CYCLE {
        tilt_platform(grid, heading)?;
    }
    Ok(())
}
