//! Criterion benchmarks for the sequence engines.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use seqcalc_core::ackermann::ackermann;
use seqcalc_core::factorial::factorial;
use seqcalc_core::fibonacci::fibonacci;
use seqcalc_core::Options;

fn bench_engines(c: &mut Criterion) {
    let ns: Vec<u64> = vec![100, 1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("Fibonacci");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci(n));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Factorial");
    for &n in &ns[..3] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| factorial(n));
        });
    }
    group.finish();

    let opts = Options::default();
    let mut group = c.benchmark_group("Ackermann");
    for &(m, n) in &[(3u64, 10u64), (4, 1), (4, 2), (5, 0)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{m},{n}")),
            &(m, n),
            |b, &(m, n)| {
                b.iter(|| ackermann(m, n, &opts).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
