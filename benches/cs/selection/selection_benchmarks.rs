use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selection::{ceiling, floor, kmax, kmin, max, min, range, NaturalOrder};

fn generate_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..size as i64)).collect()
}

fn bench_extrema(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrema");
    for size in [1_000, 10_000, 100_000] {
        let data = generate_data(size, 42);
        group.bench_with_input(BenchmarkId::new("min", size), &data, |b, data| {
            b.iter(|| min(black_box(data), &NaturalOrder))
        });
        group.bench_with_input(BenchmarkId::new("max", size), &data, |b, data| {
            b.iter(|| max(black_box(data), &NaturalOrder))
        });
    }
    group.finish();
}

fn bench_order_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_statistic");
    for size in [1_000, 10_000, 100_000] {
        let data = generate_data(size, 7);
        let k = size / 10;
        group.bench_with_input(BenchmarkId::new("kmin", size), &data, |b, data| {
            b.iter(|| kmin(black_box(data), k, &NaturalOrder))
        });
        group.bench_with_input(BenchmarkId::new("kmax", size), &data, |b, data| {
            b.iter(|| kmax(black_box(data), k, &NaturalOrder))
        });
    }
    group.finish();
}

fn bench_range_and_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_and_bounds");
    for size in [1_000, 10_000, 100_000] {
        let data = generate_data(size, 99);
        let low = size as i64 / 4;
        let high = size as i64 / 2;
        group.bench_with_input(BenchmarkId::new("range", size), &data, |b, data| {
            b.iter(|| range(black_box(data), &low, &high, &NaturalOrder))
        });
        group.bench_with_input(BenchmarkId::new("ceiling", size), &data, |b, data| {
            b.iter(|| ceiling(black_box(data), &low, &NaturalOrder))
        });
        group.bench_with_input(BenchmarkId::new("floor", size), &data, |b, data| {
            b.iter(|| floor(black_box(data), &high, &NaturalOrder))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_extrema,
    bench_order_statistics,
    bench_range_and_bounds
);
criterion_main!(benches);
