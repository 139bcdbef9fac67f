// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use nearpair::{ClosestPair, IncrementalClosestPair, Normalization, normalize};
use nearpair_fixtures::{brute_force, strictly_closer, uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_incremental_vs_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair_uniform");
    let bounds = Rect::new(-1000.0, -2000.0, 1000.0, 600.0);
    for &n in &[256usize, 1024, 4096] {
        let pts = uniform(n, bounds, &mut StdRng::seed_from_u64(n as u64));
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("incremental_n{n}"), |b| {
            let solver = ClosestPair::new();
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let out = solver.run(&pts, &mut rng).unwrap();
                black_box(out.distance);
            });
        });

        // Quadratic; keep it off the largest size.
        if n <= 1024 {
            group.bench_function(format!("brute_force_n{n}"), |b| {
                b.iter(|| black_box(brute_force(&pts).map(|bf| bf.distance)));
            });
        }
    }
    group.finish();
}

fn bench_adversarial_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair_strictly_closer");
    for &n in &[512usize, 2048] {
        let pts = strictly_closer(n, Point::new(-3.0, 4.0), 1.0);
        let mut sorted = pts.clone();
        normalize(&mut sorted, Normalization::Uniform).unwrap();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("permuted_n{n}"), |b| {
            let solver = ClosestPair::new();
            let mut rng = StdRng::seed_from_u64(11);
            b.iter(|| black_box(solver.run(&pts, &mut rng).unwrap().distance));
        });

        group.bench_function(format!("generation_order_n{n}"), |b| {
            b.iter_batched(
                || IncrementalClosestPair::from_points(&sorted).unwrap(),
                |run| black_box(run.finish().delta),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_incremental_vs_brute_force, bench_adversarial_order);
criterion_main!(benches);
