//! Criterion benchmarks for obstacle collision queries.
//! Focus sizes: n in {3, 8, 16, 64} vertices.

use armrig::obstacle::Obstacle;
use armrig::scene::{sample_obstacle, CountDist, RadialObstacleCfg, ReplayToken};
use armrig::Vec2;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn obstacle_with(n: usize) -> Obstacle {
    let cfg = RadialObstacleCfg {
        vertex_count: CountDist::Fixed(n),
        ..RadialObstacleCfg::default()
    };
    sample_obstacle(
        cfg,
        ReplayToken {
            seed: 43,
            index: n as u64,
        },
    )
}

fn random_point(rng: &mut StdRng) -> Vec2 {
    Vec2::new(rng.gen_range(-150.0..150.0), rng.gen_range(-150.0..150.0))
}

fn bench_obstacle(c: &mut Criterion) {
    let mut group = c.benchmark_group("obstacle");
    for &n in &[3usize, 8, 16, 64] {
        let obstacle = obstacle_with(n);

        group.bench_with_input(BenchmarkId::new("point_inside", n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter_batched(
                || random_point(&mut rng),
                |p| {
                    let _inside = obstacle.point_inside(p, Vec2::zeros());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("collides_with_segment", n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(11);
            b.iter_batched(
                || (random_point(&mut rng), random_point(&mut rng)),
                |(a, b2)| {
                    let _hit = obstacle.collides_with_segment(a, b2, Vec2::zeros());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_obstacle);
criterion_main!(benches);
