// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Known points.
//!
//! Solve the fixed 15-point dataset under a few seeds and step through one run.
//!
//! Run:
//! - `cargo run -p nearpair_demos --example known_points`

use nearpair::{ClosestPair, IncrementalClosestPair, Metrics};
use nearpair_fixtures::{brute_force, known_points};

fn main() {
    env_logger::init();

    let pts = known_points();
    if let Some(bf) = brute_force(&pts) {
        println!("brute force: {:.9} between {:?}", bf.distance, bf.pair);
    }

    let seeds = [1, 2, 3, 4, 5];
    let mut total = Metrics::default();
    for seed in seeds {
        match ClosestPair::new().run_with_seed(&pts, seed) {
            Ok(out) => {
                println!(
                    "seed {seed}: {:.9} between {:?} after {} rebuilds",
                    out.distance, out.pair, out.metrics.rebuilds
                );
                total += out.metrics;
            }
            Err(err) => println!("seed {seed}: {err}"),
        }
    }
    println!(
        "over {} seeds: {} rebuilds, {} operations",
        seeds.len(),
        total.rebuilds,
        total.operations()
    );

    // The dataset already lies in the unit square, so it can be stepped as is.
    let Ok(run) = IncrementalClosestPair::from_points(&pts) else {
        return;
    };
    println!("generation order, seeded at delta {:.6}", run.delta());
    for step in run {
        let marker = if step.rebuilt { " (rebuilt)" } else { "" };
        println!(
            "  insert #{} -> delta {:.6}{marker}",
            step.position, step.delta
        );
    }
}
