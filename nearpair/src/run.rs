// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end runs over caller input: validate, normalize, permute, solve.

use kurbo::Point;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::metrics::Metrics;
use crate::pair::{IncrementalClosestPair, MIN_POINTS, Site, Termination};
use crate::preprocess::{Normalization, UnitFrame, normalize, permute};

/// Result of a closest-pair run over caller input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outcome {
    /// Distance between [`pair`](Self::pair) in the caller's coordinates.
    ///
    /// With [`Normalization::Uniform`] this is the minimum pairwise distance.
    /// With [`Normalization::PerAxis`] it is the input distance of the pair that
    /// is closest after per-axis stretching.
    pub distance: f64,
    /// Minimum pairwise distance in unit-square coordinates (the final `delta`).
    pub delta: f64,
    /// Positions in the caller's slice of the closest pair, lower first.
    pub pair: (usize, usize),
    /// How the run ended.
    pub termination: Termination,
    /// Operation counters.
    pub metrics: Metrics,
    /// Map from input coordinates into the unit square used by the run.
    pub frame: UnitFrame,
}

/// Configured closest-pair solver.
///
/// ```
/// use kurbo::Point;
/// use nearpair::ClosestPair;
///
/// let pts = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(10.0, 10.0),
/// ];
/// let out = ClosestPair::new().run_with_seed(&pts, 7).unwrap();
/// assert!((out.distance - 1.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosestPair {
    normalization: Normalization,
}

impl ClosestPair {
    /// Solver with [`Normalization::Uniform`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `mode` to map input into the unit square.
    pub fn with_normalization(mut self, mode: Normalization) -> Self {
        self.normalization = mode;
        self
    }

    /// The configured normalization.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Find the closest pair of `points`, permuting with `rng`.
    ///
    /// The caller's slice is not modified.
    pub fn run<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> Result<Outcome, Error> {
        if points.len() < MIN_POINTS {
            return Err(Error::InsufficientPoints {
                found: points.len(),
                required: MIN_POINTS,
            });
        }

        let mut unit = points.to_vec();
        let frame = normalize(&mut unit, self.normalization)?;

        // Shuffle positions rather than points so the pair can be reported in
        // terms of the caller's slice.
        let mut order: Vec<usize> = (0..points.len()).collect();
        permute(&mut order, rng);
        let sites = order
            .into_iter()
            .map(|id| Site {
                point: unit[id],
                id,
            })
            .collect();

        let finished = IncrementalClosestPair::seed(sites)?.finish();
        let (a, b) = finished.pair;
        let pair = (a.min(b), a.max(b));
        let distance = points[pair.0].distance(points[pair.1]);
        debug!(
            "closest pair {pair:?} at distance {distance} ({} rebuilds, {} operations)",
            finished.metrics.rebuilds,
            finished.metrics.operations()
        );
        Ok(Outcome {
            distance,
            delta: finished.delta,
            pair,
            termination: finished.termination,
            metrics: finished.metrics,
            frame,
        })
    }

    /// [`run`](Self::run) with a [`StdRng`] seeded from `seed`, for reproducible runs.
    pub fn run_with_seed(&self, points: &[Point], seed: u64) -> Result<Outcome, Error> {
        self.run(points, &mut StdRng::seed_from_u64(seed))
    }
}

/// Closest pair of `points` with the default solver and the thread-local RNG.
pub fn closest_pair(points: &[Point]) -> Result<Outcome, Error> {
    ClosestPair::new().run(points, &mut rand::rng())
}

/// Minimum pairwise distance of `points`, in their own units.
pub fn closest_distance(points: &[Point]) -> Result<f64, Error> {
    closest_pair(points).map(|o| o.distance)
}
