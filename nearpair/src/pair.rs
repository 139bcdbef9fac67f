// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The incremental closest-pair run as an explicit state machine.
//!
//! A run is seeded from an already permuted and normalized sequence, then
//! advanced one point at a time with [`IncrementalClosestPair::step`] (or as an
//! [`Iterator`] of [`Step`]s) until every point is inserted. Each step probes the
//! 5×5 window around the point's bin; when a stored point is closer than the
//! current `delta`, `delta` shrinks and the whole grid is rebuilt before the
//! point is inserted.

use kurbo::Point;
use log::{debug, trace};

use crate::error::Error;
use crate::grid::GridIndex;
use crate::metrics::Metrics;

/// Fewest points a run can be seeded from.
pub const MIN_POINTS: usize = 3;

/// A point of the run together with its position in the caller's input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Site {
    /// Location in the unit square.
    pub point: Point,
    /// Caller-side identifier, reported back in [`Finished::pair`].
    pub id: usize,
}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Every point was inserted.
    Exhausted,
    /// Two points coincide; `delta` is exactly zero and the rest of the input
    /// was skipped.
    Coincident,
}

/// Observable phase of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Seeded, no point inserted yet.
    Seeded,
    /// At least one point inserted, more to go.
    Running,
    /// Finished; `delta` is final.
    Done(Termination),
}

/// Report of one insertion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Position of the point in the run's (permuted) sequence.
    pub position: usize,
    /// The point's [`Site::id`].
    pub id: usize,
    /// `delta` after this step.
    pub delta: f64,
    /// Distance of the first improving neighbour, if the step improved `delta`.
    ///
    /// This is the value that triggered the rebuild; it can be larger than
    /// [`Step::delta`] when the point was close to several stored points.
    pub trigger: Option<f64>,
    /// Whether the grid was rebuilt.
    pub rebuilt: bool,
}

/// Final state of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Finished {
    /// Smallest pairwise distance, in unit-square units.
    pub delta: f64,
    /// Ids of the two points realizing `delta`, earlier-inserted first.
    pub pair: (usize, usize),
    /// How the run ended.
    pub termination: Termination,
    /// Operation counters.
    pub metrics: Metrics,
}

/// Randomized incremental closest pair over the unit square.
///
/// The input must already be permuted uniformly at random and normalized into
/// `[0, 1]²`; [`ClosestPair`](crate::ClosestPair) does both. Points outside the
/// unit square are clamped into edge bins, which breaks the one-point-per-bin
/// guarantee.
#[derive(Debug)]
pub struct IncrementalClosestPair {
    sites: Vec<Site>,
    cursor: usize,
    delta: f64,
    pair: (usize, usize),
    // `None` only after a coincident pair ended the run.
    index: Option<GridIndex<usize>>,
    termination: Option<Termination>,
    metrics: Metrics,
}

impl IncrementalClosestPair {
    /// Seed a run from `sites`.
    ///
    /// The initial `delta` is the distance between the sites at positions 1
    /// and 2. The site at position 0 takes no part in seeding; it is compared
    /// only once it is inserted by the first step.
    pub fn seed(sites: Vec<Site>) -> Result<Self, Error> {
        if sites.len() < MIN_POINTS {
            return Err(Error::InsufficientPoints {
                found: sites.len(),
                required: MIN_POINTS,
            });
        }
        if let Some(site) = sites.iter().find(|s| !s.point.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index: site.id });
        }
        debug_assert!(
            sites
                .iter()
                .all(|s| (0.0..=1.0).contains(&s.point.x) && (0.0..=1.0).contains(&s.point.y)),
            "sites must be normalized into the unit square"
        );

        let (a, b) = (sites[1], sites[2]);
        let delta = a.point.distance(b.point);
        let (index, termination) = if delta == 0.0 {
            debug!("seed points {} and {} coincide", a.id, b.id);
            (None, Some(Termination::Coincident))
        } else {
            (Some(GridIndex::with_capacity(delta, sites.len())), None)
        };
        Ok(Self {
            sites,
            cursor: 0,
            delta,
            pair: (a.id, b.id),
            index,
            termination,
            metrics: Metrics::default(),
        })
    }

    /// Seed a run from points already in the unit square, using positions as ids.
    ///
    /// No permutation is applied; this is the entry point for inspecting a
    /// specific insertion order.
    pub fn from_points(points: &[Point]) -> Result<Self, Error> {
        Self::seed(
            points
                .iter()
                .enumerate()
                .map(|(id, &point)| Site { point, id })
                .collect(),
        )
    }

    /// Current phase.
    pub fn state(&self) -> State {
        match self.termination {
            Some(t) => State::Done(t),
            None if self.cursor == 0 => State::Seeded,
            None => State::Running,
        }
    }

    /// Smallest distance found so far; never increases.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Ids of the pair realizing [`delta`](Self::delta).
    pub fn pair(&self) -> (usize, usize) {
        self.pair
    }

    /// Number of points inserted so far.
    pub fn processed(&self) -> usize {
        self.cursor
    }

    /// Total number of points in the run.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Always false; a seeded run holds at least [`MIN_POINTS`] points.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// The grid as of the last step, or `None` after a coincident pair.
    pub fn index(&self) -> Option<&GridIndex<usize>> {
        self.index.as_ref()
    }

    /// Operation counters so far.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Insert the next point. Returns `None` once the run is done.
    pub fn step(&mut self) -> Option<Step> {
        if self.termination.is_some() {
            return None;
        }
        let position = self.cursor;
        let site = *self.sites.get(position)?;
        let index = self.index.take()?;
        self.cursor += 1;

        let bin = index.bin_of(site.point);
        let window = index.neighbors_of(bin);
        self.metrics.bins_enumerated += window.len();

        // Keep probing the same window while `delta` shrinks. The window was laid
        // out for the old, larger `delta`, so it still covers every stored point
        // within the new one.
        let mut trigger = None;
        loop {
            if trigger.is_some() {
                self.metrics.requeries += 1;
            }
            let probe = index.query(site.point, window, self.delta);
            self.metrics.bins_probed += probe.probed;
            let Some(hit) = probe.hit else {
                break;
            };
            trigger.get_or_insert(hit.distance);
            self.delta = hit.distance;
            self.pair = (hit.payload, site.id);
            if hit.distance == 0.0 {
                debug!(
                    "points {} and {} coincide at position {position}",
                    hit.payload, site.id
                );
                self.termination = Some(Termination::Coincident);
                return Some(Step {
                    position,
                    id: site.id,
                    delta: 0.0,
                    trigger,
                    rebuilt: false,
                });
            }
        }

        let rebuilt = trigger.is_some();
        let mut index = if rebuilt {
            debug!(
                "delta shrank to {} at position {position}; rebuilding {} points",
                self.delta,
                index.len()
            );
            self.metrics.rebuilds += 1;
            self.metrics.points_rebinned += index.len();
            index.rebuild(self.delta)
        } else {
            index
        };
        let displaced = if rebuilt {
            index.insert(site.point, site.id)
        } else {
            index.insert_at(bin, site.point, site.id)
        };
        self.index = Some(index);
        debug_assert!(
            displaced.is_none(),
            "inserting point {} displaced a stored point",
            site.id
        );

        if self.cursor == self.sites.len() {
            self.termination = Some(Termination::Exhausted);
        }
        trace!("position {position}: delta {}", self.delta);
        Some(Step {
            position,
            id: site.id,
            delta: self.delta,
            trigger,
            rebuilt,
        })
    }

    /// Run the remaining steps and report the result.
    pub fn finish(mut self) -> Finished {
        while self.step().is_some() {}
        Finished {
            delta: self.delta,
            pair: self.pair,
            termination: self.termination.unwrap_or(Termination::Exhausted),
            metrics: self.metrics,
        }
    }
}

impl Iterator for IncrementalClosestPair {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}
