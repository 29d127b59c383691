//! Criterion benchmarks for the QuickHull engine.
//! Focus sizes: n in {10, 100, 1000, 5000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::prelude::*;

fn cloud(n: usize, shape: CloudShape, seed: u64) -> Vec<Point> {
    let cfg = CloudCfg {
        count: n,
        shape,
        scale: 1000.0,
    };
    draw_points(cfg, ReplayToken { seed, index: 0 })
}

fn bench_quickhull(c: &mut Criterion) {
    let mut group = c.benchmark_group("quickhull");
    for &n in &[10usize, 100, 1000, 5000] {
        group.bench_with_input(BenchmarkId::new("disk", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Disk, 43),
                |pts| {
                    let _qh = QuickHull::new(pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("square", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Square, 44),
                |pts| {
                    let _qh = QuickHull::new(pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("write_dot", n), &n, |b, &n| {
            let qh = QuickHull::new(cloud(n, CloudShape::Disk, 45)).unwrap();
            b.iter(|| {
                let mut sink = Vec::new();
                write_dot(&qh, &mut sink, FormatCfg::default()).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quickhull);
criterion_main!(benches);
