// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adversarial order.
//!
//! Points whose generation order shrinks `delta` at every insertion, solved
//! in that order and after a random permutation.
//!
//! Run:
//! - `cargo run -p nearpair_demos --example adversarial_order`

use kurbo::Point;
use nearpair::{ClosestPair, IncrementalClosestPair, Normalization, normalize};
use nearpair_fixtures::strictly_closer;

fn main() {
    env_logger::init();

    for n in [250, 1000, 4000] {
        let pts = strictly_closer(n, Point::new(-3.0, 4.0), 1.0);

        let mut sorted = pts.clone();
        if let Err(err) = normalize(&mut sorted, Normalization::Uniform) {
            eprintln!("{err}");
            return;
        }
        let Ok(run) = IncrementalClosestPair::from_points(&sorted) else {
            return;
        };
        let in_order = run.finish().metrics;

        let Ok(out) = ClosestPair::new().run(&pts, &mut rand::rng()) else {
            return;
        };
        let shuffled = out.metrics;

        println!("n = {n}");
        println!(
            "  generation order: {:>6} rebuilds, {:>10} operations",
            in_order.rebuilds,
            in_order.operations()
        );
        println!(
            "  permuted:         {:>6} rebuilds, {:>10} operations",
            shuffled.rebuilds,
            shuffled.operations()
        );
    }
}
