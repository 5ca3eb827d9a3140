use criterion::{black_box, criterion_group, criterion_main, Criterion};

use puzzle_search::state::CreationCounter;
use puzzle_search::{LoadPuzzles, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_lights_out_3x3(c: &mut Criterion) {
    // all lights on, 5 toggles
    let puzzles = "data/lights_out/small.txt".load_lights_out().unwrap();
    let puzzle = puzzles
        .into_iter()
        .find(|puzzle| puzzle.grid.rows() == 3)
        .unwrap();
    let counter = CreationCounter::new();

    let mut group = c.benchmark_group("lights-out");
    group.sample_size(50);
    group.bench_function("3x3-all-lit", |b| {
        b.iter(|| black_box(puzzle.solve(black_box(true), &counter, false)))
    });
    group.finish();
}

#[allow(unused)]
fn bench_eight_puzzle(c: &mut Criterion) {
    let puzzle = "data/eight_puzzle/hard.txt".load_eight_puzzles().unwrap()[0];
    let counter = CreationCounter::new();

    let mut group = c.benchmark_group("eight-puzzle");
    group.sample_size(20);
    group.bench_function("hard-manhattan", |b| {
        b.iter(|| black_box(puzzle.solve(black_box(true), &counter, false)))
    });
    group.bench_function("hard-uniform-cost", |b| {
        b.iter(|| black_box(puzzle.solve(black_box(false), &counter, false)))
    });
    group.finish();
}

criterion_group!(benches, bench_lights_out_3x3, bench_eight_puzzle,);
criterion_main!(benches);
