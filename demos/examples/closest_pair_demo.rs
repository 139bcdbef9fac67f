// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest pair demo.
//!
//! Draw random points, solve with the incremental grid and with brute force,
//! and compare answers and operation counts.
//!
//! Run:
//! - `cargo run -p nearpair_demos --example closest_pair_demo`
//! - `RUST_LOG=debug cargo run -p nearpair_demos --example closest_pair_demo` to see rebuilds

use kurbo::Rect;
use log::info;
use nearpair::ClosestPair;
use nearpair_fixtures::{brute_force, uniform};

fn main() {
    env_logger::init();

    let n = 1000;
    let bounds = Rect::new(-1000.0, -2000.0, 1000.0, 600.0);
    let mut rng = rand::rng();
    let pts = uniform(n, bounds, &mut rng);
    info!("drew {n} points in {bounds:?}");

    let out = match ClosestPair::new().run(&pts, &mut rng) {
        Ok(out) => out,
        Err(err) => {
            eprintln!("closest pair failed: {err}");
            return;
        }
    };
    let Some(bf) = brute_force(&pts) else {
        return;
    };

    let (a, b) = out.pair;
    println!("incremental: {:.6} between {:?} and {:?}", out.distance, pts[a], pts[b]);
    println!(
        "  {} operations ({} bins enumerated, {} probed, {} rebinned), {} rebuilds",
        out.metrics.operations(),
        out.metrics.bins_enumerated,
        out.metrics.bins_probed,
        out.metrics.points_rebinned,
        out.metrics.rebuilds,
    );
    println!("brute force: {:.6} with {} comparisons", bf.distance, bf.comparisons);
    println!(
        "relative error: {:e}",
        (out.distance - bf.distance).abs() / bf.distance
    );
}
