//! Criterion benchmarks for growthcalc_core
//!
//! Run with: cargo bench -p growthcalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use growthcalc_core::rates::RateAssumptions;
use growthcalc_core::{comparison_series, project};

fn bench_projection(c: &mut Criterion) {
    let rates = RateAssumptions::default();
    let mut group = c.benchmark_group("project");

    for months in [6u32, 24, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(months), &months, |b, &months| {
            b.iter(|| project(black_box(25_000.0), black_box(months), &rates));
        });
    }

    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let rates = RateAssumptions::default();
    let mut group = c.benchmark_group("comparison_series");

    for months in [6u32, 24, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(months), &months, |b, &months| {
            b.iter(|| comparison_series(black_box(25_000.0), black_box(months), &rates));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_projection, bench_series);
criterion_main!(benches);
