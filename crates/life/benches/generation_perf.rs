//! Benchmark: cost of one `next_generation` call.
//!
//! The 40×40 case is the terminal viewer's default grid; 128×128 shows how the
//! per-cell neighbour lookup scales.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use life::{Cell, Grid, Universe};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_grid(size: usize) -> Grid<Cell> {
    Grid::new_random_with(size, &mut ChaCha8Rng::seed_from_u64(0xC0FFEE)).unwrap()
}

/// Random soup at the viewer's default size.
fn bench_next_generation_40(c: &mut Criterion) {
    let grid = seeded_grid(40);
    c.bench_function("next_generation_40x40", |b| {
        b.iter(|| black_box(grid.next_generation()));
    });
}

/// Larger soup, rebuilt each iteration so the population stays dense.
fn bench_next_generation_128(c: &mut Criterion) {
    c.bench_function("next_generation_128x128", |b| {
        b.iter_batched(
            || seeded_grid(128),
            |grid| black_box(grid.next_generation()),
            BatchSize::SmallInput,
        );
    });
}

/// Full `Universe::tick()` plus the byte export a renderer reads.
fn bench_universe_tick(c: &mut Criterion) {
    c.bench_function("universe_tick_cells_40x40", |b| {
        b.iter_batched(
            || Universe::with_seed(40, 7).unwrap(),
            |mut universe| {
                universe.tick();
                black_box(universe.cells());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_next_generation_40,
    bench_next_generation_128,
    bench_universe_tick,
);
criterion_main!(benches);
