//! Criterion benchmarks for the doubling engine across rings.

use std::num::Wrapping;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibring_core::{fibonacci_in, Integers, ModRing, Native};

fn bench_rings(c: &mut Criterion) {
    let ns: Vec<u64> = vec![100, 1_000, 10_000, 100_000, 1_000_000];

    let integers = Integers::new();
    let mut group = c.benchmark_group("Integers");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci_in(n, &integers));
        });
    }
    group.finish();

    let ring = ModRing::new(998_244_353).expect("non-zero modulus");
    let mut group = c.benchmark_group("ModRing");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci_in(n, &ring));
        });
    }
    group.finish();

    let wrapping = Native::<Wrapping<u64>>::new();
    let mut group = c.benchmark_group("WrappingU64");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci_in(n, &wrapping));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rings);
criterion_main!(benches);
