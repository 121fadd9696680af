use miette::*;
use std::path::Path;

type Solver = fn(&Path) -> Result<(usize, usize)>;

/// Days with a solver, in ascending order.
const SOLVERS: &[(u32, Solver)] = &[(aoc2023_day_14::DAY, aoc2023_day_14::run)];

fn solver(day: u32) -> Result<Solver> {
    SOLVERS
        .iter()
        .find(|&&(d, _)| d == day)
        .map(|&(_, solve)| solve)
        .ok_or(miette!("No solver for day {day}"))
}

fn report(day: u32, (first, second): (usize, usize)) -> String {
    format!("day {day}: ({first}, {second})")
}

#[tracing::instrument]
fn run_day(day: u32) -> Result<String> {
    let solve = solver(day)?;
    let path = aoc2023_common::input_path(day);
    let answers = solve(&path).wrap_err_with(|| format!("day {day} failed"))?;
    Ok(report(day, answers))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    match std::env::args().nth(1) {
        Some(day) => {
            let day = day
                .parse::<u32>()
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid day {day:?}"))?;
            println!("{}", run_day(day)?);
        }
        None => {
            for &(day, _) in SOLVERS {
                println!("{}", run_day(day)?);
            }
        }
    }
    Ok(())
}
