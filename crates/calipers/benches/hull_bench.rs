//! Criterion benchmarks for the exact hull and the caliper sweep.
//! Focus sizes: n in {10, 100, 1000, 10000} points on a disc (hull grows ~ n^(1/3)).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p calipers

use calipers::geom2::rand::{draw_point_cloud, CloudCfg, Layout, PointCount, ReplayToken};
use calipers::geom2::{bounding_rectangles, convex_hull, minimum_bounding_rectangle, Point};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn disc_cloud(n: usize, seed: u64) -> Vec<Point> {
    let cfg = CloudCfg {
        count: PointCount::Fixed(n),
        extent: 1_000_000,
        layout: Layout::Disc,
    };
    draw_point_cloud(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_mbr");
    for &n in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || disc_cloud(n, 43),
                |pts| {
                    let _hull = convex_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        let hull = convex_hull(&disc_cloud(n, 44)).unwrap();
        group.bench_with_input(BenchmarkId::new("bounding_rectangles", n), &hull, |b, hull| {
            b.iter(|| {
                let _rects = bounding_rectangles(hull).unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("minimum_rectangle", n), &hull, |b, hull| {
            b.iter(|| {
                let _min = minimum_bounding_rectangle(hull).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
