//! Benchmark for PersistentMap vs standard HashMap.
//!
//! Compares funkit's PersistentMap against Rust's standard HashMap for
//! common operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funkit::hash::Scalar;
use funkit::persistent::PersistentMap;
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// construction Benchmark
// =============================================================================

fn benchmark_from_pairs(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("from_pairs");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("PersistentMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let map = PersistentMap::from_pairs((0..size).map(|index| (index, index * 2)));
                    black_box(map)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let map: HashMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1_000, 10_000] {
        let persistent_map = PersistentMap::from_pairs((0..size).map(|index| (index, index)));
        let scalar_map = PersistentMap::from_pairs(
            (0..size).map(|index| (Scalar::from(format!("key-{index}")), index)),
        );
        let standard_map: HashMap<i32, i32> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for key in 0..size {
                        black_box(persistent_map.get(&black_box(key)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("PersistentMap_scalar", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for key in 0..size {
                        black_box(scalar_map.get(&Scalar::from(format!("key-{key}"))));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for key in 0..size {
                        black_box(standard_map.get(&black_box(key)));
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert_into_shared(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_into_shared");

    for size in [100, 1_000, 10_000] {
        let base = PersistentMap::from_pairs((0..size).map(|index| (index, index)));

        group.bench_with_input(
            BenchmarkId::new("PersistentMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(base.insert(black_box(size), 0)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// merge and sort Benchmark
// =============================================================================

fn benchmark_concat_and_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("concat_and_sort");

    for size in [100, 1_000, 10_000] {
        let left = PersistentMap::from_pairs((0..size).map(|index| (index, size - index)));
        let right = PersistentMap::from_pairs((size / 2..size + size / 2).map(|index| (index, index)));

        group.bench_with_input(BenchmarkId::new("concat", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.concat(&right)));
        });

        group.bench_with_input(BenchmarkId::new("sort_values", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.sort_values()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_from_pairs,
    benchmark_get,
    benchmark_insert_into_shared,
    benchmark_concat_and_sort
);
criterion_main!(benches);
