// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearpair: closest pair of 2D points in expected linear time.
//!
//! Nearpair finds the minimum pairwise distance of a point set with the
//! randomized incremental grid algorithm.
//!
//! - Points are rescaled into the unit square and inserted in uniformly random order.
//! - A spatial hash with bins of side `delta / 2` holds at most one point per bin,
//!   so each insertion only needs to look at a 5×5 block of bins.
//! - Whenever an insertion finds a closer pair, `delta` shrinks and the grid is
//!   rebuilt from scratch at the new resolution.
//!
//! Under random insertion order the `i`-th point triggers a rebuild with
//! probability at most `2 / i`, so the expected total cost is `O(n)`. The bound
//! does not hold for adversarial orders, which is why the permutation always runs.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use nearpair::{ClosestPair, Termination};
//!
//! let pts = [
//!     Point::new(0.0, 0.0),
//!     Point::new(3.0, 0.0),
//!     Point::new(6.0, 0.0),
//! ];
//! let out = ClosestPair::new().run_with_seed(&pts, 1).unwrap();
//! assert!((out.distance - 3.0).abs() < 1e-12);
//! assert_eq!(out.termination, Termination::Exhausted);
//! ```
//!
//! Coincident points end a run early with a distance of zero:
//!
//! ```rust
//! use kurbo::Point;
//! use nearpair::{Termination, closest_pair};
//!
//! let pts = [
//!     Point::new(1.0, 2.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(1.0, 2.0),
//!     Point::new(9.0, 0.0),
//! ];
//! let out = closest_pair(&pts).unwrap();
//! assert_eq!(out.distance, 0.0);
//! assert_eq!(out.termination, Termination::Coincident);
//! assert_eq!(out.pair, (0, 2));
//! ```
//!
//! ## Stepping a run
//!
//! [`IncrementalClosestPair`] exposes the algorithm as a state machine over input
//! that is already in the unit square. It applies no permutation, which makes it
//! the tool for looking at a specific insertion order:
//!
//! ```rust
//! use kurbo::Point;
//! use nearpair::IncrementalClosestPair;
//!
//! let pts = [
//!     Point::new(0.9, 0.9),
//!     Point::new(0.0, 0.0),
//!     Point::new(0.5, 0.0),
//!     Point::new(0.45, 0.05),
//! ];
//! let mut run = IncrementalClosestPair::from_points(&pts).unwrap();
//! let rebuilds = run.by_ref().filter(|s| s.rebuilt).count();
//! assert_eq!(rebuilds, 1);
//! assert_eq!(run.pair(), (2, 3));
//! ```
//!
//! ## Normalization
//!
//! The default [`Normalization::Uniform`] scales both axes by the larger extent of
//! the bounding box, so [`Outcome::distance`] is in the caller's units.
//! [`Normalization::PerAxis`] stretches each axis to `[0, 1]` independently; it
//! rejects boxes that are flat along either axis.
//!
//! ### Float semantics
//!
//! Coordinates must be finite; NaN or infinite input is rejected with
//! [`Error::NonFiniteCoordinate`].

pub mod error;
pub mod grid;
pub mod metrics;
pub mod pair;
pub mod preprocess;
pub mod run;
pub mod types;

pub use error::Error;
pub use grid::{GridIndex, Hit, Neighborhood, Probe};
pub use metrics::Metrics;
pub use pair::{Finished, IncrementalClosestPair, MIN_POINTS, Site, State, Step, Termination};
pub use preprocess::{Normalization, UnitFrame, normalize, permute};
pub use run::{ClosestPair, Outcome, closest_distance, closest_pair};
pub use types::{Axis, BinCoord};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn unit_square_corners_and_centre() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(0.5, 0.5),
        ];
        let out = ClosestPair::new().run_with_seed(&pts, 3).unwrap();
        assert!((out.distance - 0.5_f64.hypot(0.5)).abs() < 1e-12);
        assert_eq!(out.pair.1, 4);
    }

    #[test]
    fn runs_can_move_between_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<IncrementalClosestPair>();
        assert_send::<GridIndex<usize>>();
        assert_send::<Outcome>();
    }

    #[test]
    fn collinear_points_report_their_spacing() {
        let d = 0.125;
        let pts = [Point::new(0.0, 0.0), Point::new(d, 0.0), Point::new(2.0 * d, 0.0)];
        for seed in 0..20 {
            let out = ClosestPair::new().run_with_seed(&pts, seed).unwrap();
            assert_eq!(out.distance, d);
        }
    }
}
