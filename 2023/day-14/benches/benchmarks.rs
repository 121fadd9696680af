use aoc2023_day_14::{cycle, part1, part2, spin_cycle, Grid};

fn main() {
    divan::main();
}

const EXAMPLE: &str = "O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(EXAMPLE)).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(EXAMPLE)).unwrap();
}

#[divan::bench]
fn bench_spin_cycle(bencher: divan::Bencher) {
    let grid: Grid = EXAMPLE.parse().unwrap();
    bencher
        .with_inputs(|| grid.clone())
        .bench_local_values(|mut grid| {
            spin_cycle(&mut grid).unwrap();
            grid
        });
}

#[divan::bench]
fn bench_detect_cycle(bencher: divan::Bencher) {
    let grid: Grid = EXAMPLE.parse().unwrap();
    bencher
        .with_inputs(|| grid.clone())
        .bench_local_values(|mut grid| cycle::detect_spin_cycle(&mut grid).unwrap());
}
