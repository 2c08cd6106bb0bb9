//! Benchmarks pour la conversion National Grid ↔ WGS84

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Grille régulière couvrant la Grande-Bretagne
fn grid_points() -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for i in 0..=28 {
        for j in 0..=52 {
            points.push((i as f64 * 25000.0, j as f64 * 25000.0));
        }
    }
    points
}

fn bench_convert_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_single");

    for &(name, e, n) in &[
        ("caister", 651409.903, 313177.270),
        ("origin", 400000.0, -100000.0),
        ("shetland", 450000.0, 1150000.0),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(e, n), |b, &(e, n)| {
            b.iter(|| black_box(bng_latlon::convert(black_box(e), black_box(n)).unwrap()))
        });
    }

    group.finish();
}

fn bench_convert_grid(c: &mut Criterion) {
    let points = grid_points();

    let mut group = c.benchmark_group("convert_grid");
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let converted: usize = points
                .iter()
                .filter_map(|&(e, n)| bng_latlon::convert(black_box(e), black_box(n)).ok())
                .count();
            black_box(converted)
        })
    });

    group.bench_function("parallel", |b| {
        use rayon::prelude::*;

        b.iter(|| {
            let converted: usize = points
                .par_iter()
                .filter_map(|&(e, n)| bng_latlon::convert(black_box(e), black_box(n)).ok())
                .count();
            black_box(converted)
        })
    });

    group.finish();
}

fn bench_to_grid(c: &mut Criterion) {
    c.bench_function("to_grid", |b| {
        b.iter(|| {
            let grid = bng_latlon::to_grid(black_box(52.657979), black_box(1.716052)).unwrap();
            black_box(grid)
        })
    });
}

criterion_group!(benches, bench_convert_single, bench_convert_grid, bench_to_grid);
criterion_main!(benches);
