//! # Arena Benchmark
//!
//! Allocation and reset must stay O(1) and allocation-free after setup.
//!
//! Run with: `cargo bench --package bedrock_core --bench arena_benchmark`

// Benchmarks don't need docs
#![allow(missing_docs)]

use bedrock_core::bits::mib;
use bedrock_core::Arena;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Arena size used by every benchmark.
const CAPACITY: usize = mib(1);

/// Benchmark: allocate fixed-size blocks until the arena is exhausted.
fn bench_fill_arena(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_arena");

    for size in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut arena = Arena::new(CAPACITY).unwrap();
            b.iter(|| {
                arena.reset();
                let mut count = 0usize;
                while let Ok(range) = arena.allocate(black_box(size)) {
                    black_box(range);
                    count += 1;
                }
                count
            });
        });
    }

    group.finish();
}

/// Benchmark: a single allocation on a warm arena.
fn bench_single_allocate(c: &mut Criterion) {
    let mut arena = Arena::new(CAPACITY).unwrap();
    c.bench_function("allocate_24_bytes", |b| {
        b.iter(|| {
            if !arena.can_allocate(24) {
                arena.reset();
            }
            black_box(arena.allocate(black_box(24)))
        });
    });
}

/// Benchmark: reset cost, which zeroes the whole region.
fn bench_reset(c: &mut Criterion) {
    let mut arena = Arena::new(CAPACITY).unwrap();
    c.bench_function("reset_1MiB", |b| {
        b.iter(|| {
            let _ = arena.allocate(4096);
            arena.reset();
        });
    });
}

criterion_group!(benches, bench_fill_arena, bench_single_allocate, bench_reset);
criterion_main!(benches);
