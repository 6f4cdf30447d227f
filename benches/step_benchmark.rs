/*
 * Bouncing Bodies Benchmark
 *
 * Measures the cost of one physics step and of building the world for
 * a range of body counts.
 */

use bouncing_bodies::{Viewport, World};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const VIEWPORT: Viewport = Viewport::new(640, 480);

// Benchmark a single step of the simulation
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for num_bodies in [50, 200, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_bodies), num_bodies, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut world = World::new(n, VIEWPORT, &mut rng);

            b.iter(|| {
                world.step();
                black_box(world.bodies());
            });
        });
    }

    group.finish();
}

// Benchmark world construction
fn bench_world_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_new");

    for num_bodies in [50, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_bodies), num_bodies, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(World::new(n, VIEWPORT, &mut rng)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_world_new
}

criterion_main!(benches);
