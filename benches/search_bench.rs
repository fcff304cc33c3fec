//! Benchmark for the word search.
//!
//! Compares the single-threaded search against the rayon version on seeded
//! random boards of increasing size, using the embedded dictionary.

use boggle_solver::core::{AdjacencyIndex, Grid};
use boggle_solver::lexicon::Lexicon;
use boggle_solver::search::PathSearchEngine;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_search(c: &mut Criterion) {
    let lexicon = Lexicon::embedded();
    let mut group = c.benchmark_group("search");

    for size in [4usize, 5, 6] {
        let grid = Grid::random(size, size, &mut StdRng::seed_from_u64(size as u64)).unwrap();
        let adjacency = AdjacencyIndex::build(&grid);
        let engine = PathSearchEngine::new(&grid, &adjacency, &lexicon);

        group.bench_with_input(BenchmarkId::new("sequential", size), &engine, |b, engine| {
            b.iter(|| black_box(engine.search()));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &engine, |b, engine| {
            b.iter(|| black_box(engine.search_parallel()));
        });
    }

    group.finish();
}

fn bench_lexicon_build(c: &mut Criterion) {
    c.bench_function("lexicon_embedded", |b| {
        b.iter(|| black_box(Lexicon::embedded()));
    });
}

criterion_group!(benches, bench_search, bench_lexicon_build);
criterion_main!(benches);
