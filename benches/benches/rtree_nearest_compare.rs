// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use nearpair::ClosestPair;
use nearpair_fixtures::uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rstar::RTree;

/// Closest pair as a nearest-neighbour sweep over a bulk-loaded R-tree.
fn rstar_closest_distance(pts: Vec<[f64; 2]>) -> f64 {
    let tree = RTree::bulk_load(pts);
    tree.iter()
        .filter_map(|p| {
            // The first neighbour is the point itself.
            tree.nearest_neighbor_iter(p)
                .nth(1)
                .map(|q| (p[0] - q[0]).hypot(p[1] - q[1]))
        })
        .fold(f64::INFINITY, f64::min)
}

fn bench_rtree_nearest_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair_vs_rstar");
    let bounds = Rect::new(-1000.0, -2000.0, 1000.0, 600.0);
    for &n in &[1024usize, 8192] {
        let pts = uniform(n, bounds, &mut StdRng::seed_from_u64(n as u64));
        let raw: Vec<[f64; 2]> = pts.iter().map(|p| [p.x, p.y]).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("nearpair_n{n}"), |b| {
            let solver = ClosestPair::new();
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| black_box(solver.run(&pts, &mut rng).unwrap().distance));
        });

        group.bench_function(format!("rstar_bulk_nearest_n{n}"), |b| {
            b.iter_batched(
                || raw.clone(),
                |raw| black_box(rstar_closest_distance(raw)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_nearest_compare);
criterion_main!(benches);
