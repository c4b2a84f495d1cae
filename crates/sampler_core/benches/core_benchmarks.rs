//! Criterion benchmarks for the range samplers.
//!
//! Measures raw draw throughput and the overhead each ranged mapping adds
//! on top of it, across representative spans.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_core::sample::{ranged_float, ranged_i64, vector_by_magnitude};
use sampler_core::source::{SeededSource, UniformSource};

/// Benchmark raw primitive draws.
fn bench_raw_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_draws");
    let mut source = SeededSource::from_seed(42);

    group.bench_function("next_u64", |b| {
        b.iter(|| black_box(source.next_u64()));
    });

    group.bench_function("next_f64", |b| {
        b.iter(|| black_box(source.next_f64()));
    });

    group.bench_function("fill_bytes_1k", |b| {
        let mut buffer = vec![0u8; 1024];
        b.iter(|| {
            source.fill_bytes(black_box(&mut buffer));
        });
    });

    group.finish();
}

/// Benchmark ranged integer draws across spans with different rejection
/// characteristics.
fn bench_ranged_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranged_i64");
    let mut source = SeededSource::from_seed(42);

    for span in [6i64, 1 << 20, (1 << 62) + 1] {
        group.bench_with_input(BenchmarkId::new("span", span), &span, |b, &span| {
            b.iter(|| black_box(ranged_i64(&mut source, 0, span)));
        });
    }

    group.finish();
}

/// Benchmark floating and planar draws.
fn bench_derived_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_samplers");
    let mut source = SeededSource::from_seed(42);

    group.bench_function("ranged_float", |b| {
        b.iter(|| black_box(ranged_float(&mut source, -1.0_f64, 1.0)));
    });

    group.bench_function("vector_by_magnitude", |b| {
        b.iter(|| black_box(vector_by_magnitude(&mut source, 0.0, 1.0)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_raw_draws,
    bench_ranged_i64,
    bench_derived_samplers
);
criterion_main!(benches);
