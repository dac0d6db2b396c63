//! Maze Benchmarks
//!
//! Benchmarks for the generation pipeline and the A* solver:
//! - Full generation (carve + braid + graph build) across grid sizes
//! - Entrance-to-exit solve on a pre-generated maze
//! - Graph rebuild from unchanged wall state
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vyuha_maze::{Maze, MazeConfig, PassageGraph};

/// Seeded config so every iteration does identical work
fn benchmark_config(size: usize) -> MazeConfig {
    MazeConfig::with_dimensions(size, size).with_seed(42)
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for size in [16, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let config = benchmark_config(size);
            b.iter(|| Maze::generate(black_box(&config)).unwrap());
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for size in [16, 64, 128] {
        let maze = Maze::generate(&benchmark_config(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &maze, |b, maze| {
            b.iter(|| maze.solve().unwrap());
        });
    }
    group.finish();
}

fn bench_graph_rebuild(c: &mut Criterion) {
    let maze = Maze::generate(&benchmark_config(64)).unwrap();
    let mut graph = PassageGraph::from_maze(&maze);
    c.bench_function("graph_rebuild_64", |b| {
        b.iter(|| graph.rebuild(black_box(&maze)));
    });
}

criterion_group!(benches, bench_generation, bench_solve, bench_graph_rebuild);
criterion_main!(benches);
