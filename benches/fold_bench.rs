//! Benchmark for reduce versus fold.
//!
//! Folding pays for splitting and merging, so it only wins when each element
//! carries real work and the executor runs halves in parallel. These
//! benchmarks compare, for the same pipeline:
//!
//! 1. **reduce**: one accumulator threaded through every element
//! 2. **fold (sequential)**: split and merged, on the calling thread
//! 3. **fold (rayon)**: split and merged, halves on the rayon pool
//!
//! The rayon variant requires the `rayon` feature to be enabled.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reducers::fold::{Sequential, combiner, fold_with};
use reducers::{filter, map, reduce};
use std::hint::black_box;

/// Mixes the bits of `input` for a fixed number of rounds.
#[inline(never)]
fn hash_rounds(input: u64) -> u64 {
    let mut state = input ^ 0x9e37_79b9_7f4a_7c15;
    for round in 0..64 {
        state = state.rotate_left(5).wrapping_mul(0x5851_f42d_4c95_7f2d).wrapping_add(round);
    }
    state
}

fn benchmark_cheap_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cheap_sum");

    for size in [1_000_u64, 100_000, 1_000_000] {
        let data: Vec<u64> = (0..size).collect();
        let sum = combiner(|| 0_u64, |left: u64, right: u64| left.wrapping_add(right));

        group.bench_with_input(BenchmarkId::new("reduce", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(reduce(
                    filter(&data, |value| **value % 2 == 0),
                    |total: u64, value| total.wrapping_add(*value),
                    0,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("fold_sequential", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(fold_with(
                    filter(&data, |value| **value % 2 == 0),
                    |total: u64, value: &u64| total.wrapping_add(*value),
                    &sum,
                    &Sequential::new(),
                ))
            });
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("fold_rayon", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(fold_with(
                    filter(&data, |value| **value % 2 == 0),
                    |total: u64, value: &u64| total.wrapping_add(*value),
                    &sum,
                    &reducers::fold::RayonExecutor::new(),
                ))
            });
        });
    }

    group.finish();
}

fn benchmark_expensive_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("expensive_map");
    group.sample_size(50);

    for size in [10_000_u64, 100_000] {
        let data: Vec<u64> = (0..size).collect();
        let xor = combiner(|| 0_u64, |left: u64, right: u64| left ^ right);

        group.bench_with_input(BenchmarkId::new("reduce", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(reduce(
                    map(&data, |value| hash_rounds(*value)),
                    |total: u64, value| total ^ value,
                    0,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("fold_sequential", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(fold_with(
                    map(&data, |value: &u64| hash_rounds(*value)),
                    |total: u64, value: u64| total ^ value,
                    &xor,
                    &Sequential::new(),
                ))
            });
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("fold_rayon", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(fold_with(
                    map(&data, |value: &u64| hash_rounds(*value)),
                    |total: u64, value: u64| total ^ value,
                    &xor,
                    &reducers::fold::RayonExecutor::new(),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_cheap_sum, benchmark_expensive_map);
criterion_main!(benches);
