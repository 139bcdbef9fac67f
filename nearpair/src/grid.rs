// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive uniform grid over the unit square.
//!
//! The grid is a spatial hash from [`BinCoord`] to at most one stored point. Its
//! bins have side `delta / 2`, where `delta` is the smallest distance seen so far
//! among the stored points. Two stored points in one bin would be closer than
//! `delta`, so every bin holds at most one point, and any point closer than
//! `delta` to a query lies within two bins of the query's bin on each axis.
//!
//! The grid owns its `delta`; the number of bins per axis (`dim`) is derived from
//! it once at construction. Shrinking `delta` means building a new grid with
//! [`GridIndex::rebuild`].

use core::fmt::Debug;

use kurbo::Point;
use rustc_hash::FxHashMap;

use crate::types::{BinCoord, grid_dim};

/// Radius of the probe window in bins. A 5×5 window covers every point within
/// `delta` of the query when bins have side `delta / 2`.
pub const WINDOW_RADIUS: i64 = 2;

/// A stored point with its caller payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry<P> {
    /// Stored location (unit square).
    pub point: Point,
    /// Caller payload, typically the point's position in the input.
    pub payload: P,
}

/// Rectangular block of bins around a query bin, clipped to the grid.
///
/// Iterates row-major: rows from low to high `y`, and within a row columns from
/// low to high `x`. The order is part of the probing contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    min: BinCoord,
    max: BinCoord,
}

impl Neighborhood {
    /// The bins within `radius` of `center` on each axis, clipped to `[0, dim - 1]`.
    pub fn around(center: BinCoord, radius: i64, dim: i64) -> Self {
        let hi = dim - 1;
        Self {
            min: BinCoord::new(
                center.x.saturating_sub(radius).max(0),
                center.y.saturating_sub(radius).max(0),
            ),
            max: BinCoord::new(
                center.x.saturating_add(radius).min(hi),
                center.y.saturating_add(radius).min(hi),
            ),
        }
    }

    /// Number of bins in the window.
    pub fn len(&self) -> usize {
        let w = usize::try_from(self.max.x - self.min.x + 1).unwrap_or(0);
        let h = usize::try_from(self.max.y - self.min.y + 1).unwrap_or(0);
        w * h
    }

    /// True if clipping left no bins.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bins of the window in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = BinCoord> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| BinCoord::new(x, y)))
    }
}

/// First stored point found strictly closer than the probe's `delta`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit<P> {
    /// Bin holding the stored point.
    pub bin: BinCoord,
    /// The stored point.
    pub point: Point,
    /// Its payload.
    pub payload: P,
    /// Distance from the query point; always below the probe's `delta`.
    pub distance: f64,
}

/// Result of [`GridIndex::query`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Probe<P> {
    /// The first improving neighbour, if any.
    pub hit: Option<Hit<P>>,
    /// Bins looked up before the scan stopped.
    pub probed: usize,
}

impl<P> Probe<P> {
    /// Whether the probe found a point closer than `delta`.
    pub fn improved(&self) -> bool {
        self.hit.is_some()
    }

    /// The hit distance, or `delta` unchanged when nothing improved.
    pub fn new_delta(&self, delta: f64) -> f64 {
        self.hit.as_ref().map_or(delta, |h| h.distance)
    }
}

/// Spatial hash over the unit square with bins of side `delta / 2`.
#[derive(Clone)]
pub struct GridIndex<P: Copy + Debug> {
    delta: f64,
    dim: i64,
    bins: FxHashMap<BinCoord, Entry<P>>,
}

impl<P: Copy + Debug> GridIndex<P> {
    /// Create an empty grid for the given `delta`.
    ///
    /// Panics if `delta` is not positive and finite; a zero `delta` has no grid.
    pub fn new(delta: f64) -> Self {
        Self::with_capacity(delta, 0)
    }

    /// Create an empty grid with room for `capacity` points.
    pub fn with_capacity(delta: f64, capacity: usize) -> Self {
        assert!(
            delta > 0.0 && delta.is_finite(),
            "grid delta must be positive and finite, got {delta}"
        );
        let mut bins = FxHashMap::default();
        bins.reserve(capacity);
        Self {
            delta,
            dim: grid_dim(delta),
            bins,
        }
    }

    /// The distance this grid was built for.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Bins per axis; valid coordinates are `[0, dim - 1]`.
    pub fn dim(&self) -> i64 {
        self.dim
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// True if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Entry stored at `bin`, if occupied.
    pub fn get(&self, bin: BinCoord) -> Option<&Entry<P>> {
        self.bins.get(&bin)
    }

    /// Occupied bins and their entries, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (BinCoord, &Entry<P>)> + '_ {
        self.bins.iter().map(|(b, e)| (*b, e))
    }

    /// Bin of `point` under this grid's `delta`, clamped into the grid.
    ///
    /// Clamping only affects coordinates on the far edge of the unit square, which
    /// would otherwise fall one bin past `dim - 1`.
    pub fn bin_of(&self, point: Point) -> BinCoord {
        BinCoord::of(point, self.delta).clamp(self.dim)
    }

    /// The up-to-25 bins within two bins of `bin` on each axis.
    pub fn neighbors_of(&self, bin: BinCoord) -> Neighborhood {
        Neighborhood::around(bin, WINDOW_RADIUS, self.dim)
    }

    /// Scan `window` row-major and return the first stored point strictly closer
    /// to `point` than `delta`.
    ///
    /// The scan stops at the first improving bin; it does not look for the
    /// closest of several improving neighbours.
    pub fn query(&self, point: Point, window: Neighborhood, delta: f64) -> Probe<P> {
        let mut probed = 0;
        for bin in window.iter() {
            probed += 1;
            let Some(entry) = self.bins.get(&bin) else {
                continue;
            };
            let distance = entry.point.distance(point);
            if distance < delta {
                return Probe {
                    hit: Some(Hit {
                        bin,
                        point: entry.point,
                        payload: entry.payload,
                        distance,
                    }),
                    probed,
                };
            }
        }
        Probe { hit: None, probed }
    }

    /// Store `point` in its bin. Returns the entry it displaced, if any.
    pub fn insert(&mut self, point: Point, payload: P) -> Option<Entry<P>> {
        let bin = self.bin_of(point);
        self.insert_at(bin, point, payload)
    }

    /// Store `point` at a precomputed `bin`. Returns the entry it displaced, if any.
    ///
    /// The bin is expected to be empty. A displaced entry means the caller's
    /// `delta` is larger than the distance between the two points.
    pub fn insert_at(&mut self, bin: BinCoord, point: Point, payload: P) -> Option<Entry<P>> {
        debug_assert_eq!(bin, self.bin_of(point), "point stored outside its bin");
        self.bins.insert(bin, Entry { point, payload })
    }

    /// Re-bin every stored point into a fresh grid for `new_delta`.
    ///
    /// Cost is linear in the number of stored points.
    pub fn rebuild(self, new_delta: f64) -> Self {
        let mut next = Self::with_capacity(new_delta, self.bins.len());
        for entry in self.bins.into_values() {
            let displaced = next.insert(entry.point, entry.payload);
            debug_assert!(
                displaced.is_none(),
                "two stored points share a bin after rebuilding at delta {new_delta}"
            );
        }
        next
    }

    /// Whether every entry sits in the bin its point maps to under this grid's `delta`.
    pub fn is_consistent(&self) -> bool {
        self.bins.iter().all(|(bin, e)| *bin == self.bin_of(e.point))
    }
}

impl<P: Copy + Debug> Debug for GridIndex<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridIndex")
            .field("delta", &self.delta)
            .field("dim", &self.dim)
            .field("occupied", &self.bins.len())
            .finish_non_exhaustive()
    }
}
