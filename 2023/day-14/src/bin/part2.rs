use miette::*;
use std::path::PathBuf;

use aoc2023_day_14::{part2, DAY};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| aoc2023_common::input_path(DAY));
    let input = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
