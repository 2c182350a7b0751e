//! Criterion benchmarks for the rotation search.
//! Focus sizes: vertex counts n in {4, 32, 256, 1024} for both shapes.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use statefit::fit::{find_fitting_rotation, FitCfg};
use statefit::geom2::Polygon;

/// Star-shaped ring around `(cx, cy)` with jittered radii in `[r, 1.3·r]`.
fn jagged_ring(n: usize, cx: f64, cy: f64, r: f64, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    let pts: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let th = std::f64::consts::TAU * k as f64 / n as f64;
            let rr = r * rng.gen_range(1.0..1.3);
            (cx + rr * th.cos(), cy + rr * th.sin())
        })
        .collect();
    Polygon::from_xy(&pts)
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    for &n in &[4usize, 32, 256, 1024] {
        let container = jagged_ring(n, 0.0, 0.0, 10.0, 1);
        let fits = jagged_ring(n, 0.0, 0.0, 4.0, 2);
        let too_big = jagged_ring(n, 0.0, 0.0, 12.0, 3);
        group.bench_with_input(BenchmarkId::new("find_fitting_rotation_hit", n), &n, |b, _| {
            b.iter(|| find_fitting_rotation(&fits, &container, FitCfg::default()))
        });
        group.bench_with_input(BenchmarkId::new("find_fitting_rotation_miss", n), &n, |b, _| {
            b.iter(|| find_fitting_rotation(&too_big, &container, FitCfg::default()))
        });
        group.bench_with_input(BenchmarkId::new("midpoints_hit", n), &n, |b, _| {
            b.iter(|| find_fitting_rotation(&fits, &container, FitCfg::with_midpoints()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
