//! Benchmarks for constraint-graph construction and greedy coloring.
//!
//! # Benchmarks
//!
//! - **`build_graph`**: Constructs the 81-node constraint graph from scratch.
//! - **`greedy_classic`**: Greedy-colors the classic 30-given example puzzle
//!   against a pre-built graph.
//! - **`greedy_empty`**: Greedy-colors the all-empty puzzle, the pure
//!   fill-phase worst case (81 neighbor scans).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench coloring
//! ```

use std::{hint, str::FromStr as _};

use criterion::{Criterion, criterion_group, criterion_main};
use tintoku_core::DigitGrid;
use tintoku_solver::{ConstraintGraph, greedy};

const CLASSIC: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn bench_build_graph(c: &mut Criterion) {
    c.bench_function("build_graph", |b| {
        b.iter(|| hint::black_box(ConstraintGraph::new()));
    });
}

fn bench_greedy_classic(c: &mut Criterion) {
    let graph = ConstraintGraph::new();
    let puzzle = DigitGrid::from_str(CLASSIC).unwrap();

    c.bench_function("greedy_classic", |b| {
        b.iter(|| hint::black_box(greedy::color(&graph, &puzzle)));
    });
}

fn bench_greedy_empty(c: &mut Criterion) {
    let graph = ConstraintGraph::new();
    let puzzle = DigitGrid::new();

    c.bench_function("greedy_empty", |b| {
        b.iter(|| hint::black_box(greedy::color(&graph, &puzzle)));
    });
}

criterion_group!(
    benches,
    bench_build_graph,
    bench_greedy_classic,
    bench_greedy_empty
);
criterion_main!(benches);
