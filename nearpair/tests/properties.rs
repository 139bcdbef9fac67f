// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized agreement with the brute-force oracle.

use kurbo::Point;
use nearpair::{ClosestPair, IncrementalClosestPair, Normalization, State, Termination, normalize};
use nearpair_fixtures::brute_force;
use proptest::prelude::*;

fn point_in(lo: f64, hi: f64) -> impl Strategy<Value = Point> {
    (lo..hi, lo..hi).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn distance_matches_brute_force(
        pts in prop::collection::vec(point_in(-1000.0, 1000.0), 3..60),
        seed in any::<u64>(),
    ) {
        let want = brute_force(&pts).unwrap();
        let out = ClosestPair::new().run_with_seed(&pts, seed).unwrap();
        // Ties may resolve to a different pair after rescaling.
        prop_assert!((out.distance - want.distance).abs() <= 1e-9 * 2000.0);
        prop_assert!(out.pair.0 < out.pair.1);
        prop_assert_eq!(out.distance, pts[out.pair.0].distance(pts[out.pair.1]));
    }

    #[test]
    fn duplicated_point_is_found(
        pts in prop::collection::vec(point_in(-50.0, 50.0), 3..40),
        pick in any::<prop::sample::Index>(),
        seed in any::<u64>(),
    ) {
        let mut pts = pts;
        let dup = pts[pick.index(pts.len())];
        pts.push(dup);
        let out = ClosestPair::new().run_with_seed(&pts, seed).unwrap();
        prop_assert_eq!(out.distance, 0.0);
        prop_assert_eq!(out.termination, Termination::Coincident);
    }

    #[test]
    fn steps_shrink_delta_and_keep_bins_exclusive(
        pts in prop::collection::vec(point_in(0.0, 1.0), 3..120),
    ) {
        let mut pts = pts;
        normalize(&mut pts, Normalization::Uniform).unwrap();
        let mut run = IncrementalClosestPair::from_points(&pts).unwrap();
        let mut last = run.delta();
        while let Some(step) = run.step() {
            prop_assert!(step.delta <= last);
            if let Some(trigger) = step.trigger {
                prop_assert!(trigger < last);
                prop_assert!(step.delta <= trigger);
            }
            last = step.delta;
            if let Some(index) = run.index() {
                prop_assert_eq!(index.len(), run.processed());
                prop_assert!(index.is_consistent());
            }
        }
        prop_assert!(matches!(run.state(), State::Done(_)));
        let want = brute_force(&pts).unwrap();
        prop_assert!((run.delta() - want.distance).abs() <= 1e-12);
    }
}
