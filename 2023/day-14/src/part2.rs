use miette::*;

use crate::cycle::fast_forward_spins;
use crate::error;
use crate::grid::Grid;
use crate::score::north_load;

/// Spin cycles to run before weighing the platform.
pub const SPIN_TARGET: usize = 1_000_000_000;

/// Load after `spins` spin cycles.
pub fn solve(mut grid: Grid, spins: usize) -> error::Result<usize> {
    if let Some(cycle) = fast_forward_spins(&mut grid, spins)? {
        tracing::info!(start = cycle.start, period = cycle.period, "spin cycles repeat");
    }
    Ok(north_load(&grid))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;
    Ok(solve(grid, SPIN_TARGET)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::tests::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("64", process(EXAMPLE)?);
        Ok(())
    }

    #[rstest]
    #[case(0, 104)]
    #[case(1, 87)]
    #[case(3, 69)]
    #[case(6, 64)]
    #[case(9, 68)]
    #[case(10, 69)]
    #[case(17, 69)]
    fn load_after_spins(#[case] spins: usize, #[case] expected: usize) -> Result<()> {
        let grid: Grid = EXAMPLE.parse()?;
        assert_eq!(expected, solve(grid, spins)?);
        Ok(())
    }
}
