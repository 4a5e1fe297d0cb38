//! Criterion benchmarks for the picarlo kernel.
//!
//! Benchmarks cover:
//! - Sampler throughput (1K, 10K, 100K points)
//! - End-to-end estimates across worker-pool sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use picarlo_kernel::mc::{estimate, sample_with_rng};
use picarlo_kernel::rng::SamplerRng;

/// Benchmark raw sampling throughput (foundation of the pipeline).
fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");

    for n_points in [1_000u64, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("points", n_points),
            &n_points,
            |b, &n| {
                let mut rng = SamplerRng::from_seed(42);
                b.iter(|| black_box(sample_with_rng(n, &mut rng)));
            },
        );
    }

    group.finish();
}

/// Benchmark the full pipeline at a fixed budget across pool sizes.
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    group.sample_size(20); // Reduce sample size for slower benchmarks

    for n_workers in [1usize, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("workers", n_workers),
            &n_workers,
            |b, &w| {
                b.iter(|| estimate(black_box(1_000_000), w).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sampler, bench_estimate);
criterion_main!(benches);
