// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearpair Fixtures: point sources and a quadratic oracle.
//!
//! These are the collaborators of the closest-pair kernel. Nothing here depends on
//! `nearpair` itself; tests, benches, and demos feed the same points to both sides
//! and compare.
//!
//! - [`brute_force`]: the `O(n²)` reference answer with a comparison count.
//! - [`uniform`]: points drawn uniformly from a rectangle.
//! - [`known_points`]: a fixed 15-point dataset.
//! - [`strictly_closer`]: points whose generation order is the worst case for
//!   un-permuted insertion.

use kurbo::{Point, Rect};
use rand::Rng;

/// Reference answer from [`brute_force`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BruteForce {
    /// Minimum distance over all pairs of distinct positions.
    pub distance: f64,
    /// Positions of a pair realizing `distance`, lower first.
    pub pair: (usize, usize),
    /// Distance evaluations performed, counting every ordered `(i, j)`.
    pub comparisons: usize,
}

/// Minimum pairwise distance by comparing every ordered pair `(i, j)`, `i != j`.
///
/// Returns `None` for fewer than two points. The comparison count is `n²`, the
/// cost of the naive nested loop including the skipped diagonal.
pub fn brute_force(points: &[Point]) -> Option<BruteForce> {
    if points.len() < 2 {
        return None;
    }
    let mut best = BruteForce {
        distance: f64::INFINITY,
        pair: (0, 1),
        comparisons: 0,
    };
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate() {
            best.comparisons += 1;
            if i == j {
                continue;
            }
            let d = a.distance(*b);
            if d < best.distance {
                best.distance = d;
                best.pair = (i.min(j), i.max(j));
            }
        }
    }
    Some(best)
}

/// `n` points drawn uniformly from `bounds`.
pub fn uniform<R: Rng + ?Sized>(n: usize, bounds: Rect, rng: &mut R) -> Vec<Point> {
    let (w, h) = (bounds.width(), bounds.height());
    (0..n)
        .map(|_| {
            Point::new(
                bounds.x0 + rng.random::<f64>() * w,
                bounds.y0 + rng.random::<f64>() * h,
            )
        })
        .collect()
}

/// A fixed dataset of 15 points in the unit square.
pub fn known_points() -> Vec<Point> {
    const XS: [f64; 15] = [
        0.306_853_12,
        0.048_676_863,
        0.668_461_3,
        0.903_486_9,
        0.075_514_82,
        0.785_505_7,
        1.0,
        0.876_468_06,
        0.108_616_16,
        0.949_505_3,
        0.978_211_1,
        0.633_928,
        0.763_473_8,
        0.891_973,
        0.808_822_4,
    ];
    const YS: [f64; 15] = [
        0.490_775,
        0.144_875_93,
        0.502_845_8,
        0.434_533_54,
        0.868_312_7,
        0.099_942_535,
        0.182_275_73,
        0.817_093,
        0.014_803_829,
        0.671_283_25,
        0.224_498_57,
        0.343_574_4,
        0.379_614_32,
        0.995_644_3,
        0.832_279_86,
    ];
    XS.iter()
        .zip(YS.iter())
        .map(|(&x, &y)| Point::new(x, y))
        .collect()
}

/// Shrink factor applied to the offset between consecutive [`strictly_closer`] points.
pub const STRICTLY_CLOSER_DECAY: f64 = 0.995;

/// `n` points `origin + (inc, inc)` with `inc` multiplied by
/// [`STRICTLY_CLOSER_DECAY`] after each point.
///
/// In generation order every new point is closer to its predecessor than any
/// earlier pair, so inserting them unshuffled shrinks `delta` at every step.
pub fn strictly_closer(n: usize, origin: Point, increment: f64) -> Vec<Point> {
    let mut inc = increment;
    (0..n)
        .map(|_| {
            let p = Point::new(origin.x + inc, origin.y + inc);
            inc *= STRICTLY_CLOSER_DECAY;
            p
        })
        .collect()
}
