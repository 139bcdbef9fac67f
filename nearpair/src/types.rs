// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive value types shared by the grid and the run state machine.

use core::fmt;

use kurbo::Point;

/// Discretized cell coordinate of the grid.
///
/// A bin is a square of side `delta / 2`. Equality, ordering, and hashing are
/// structural so bins can key a hash map directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinCoord {
    /// Column (x axis).
    pub x: i64,
    /// Row (y axis).
    pub y: i64,
}

impl BinCoord {
    /// Create a bin coordinate from its column and row.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The bin containing `point` for bins of side `delta / 2`.
    ///
    /// This is the raw `floor(coord / (delta / 2))` per axis and is not clamped
    /// to any grid; see [`GridIndex::bin_of`](crate::GridIndex::bin_of) for the
    /// clamped variant used during a run.
    pub fn of(point: Point, delta: f64) -> Self {
        let side = 0.5 * delta;
        debug_assert!(side > 0.0, "bin side must be positive");
        Self {
            x: floor_to_i64(point.x / side),
            y: floor_to_i64(point.y / side),
        }
    }

    /// Clamp both axes into `[0, dim - 1]`.
    #[inline]
    pub fn clamp(self, dim: i64) -> Self {
        let hi = (dim - 1).max(0);
        Self {
            x: self.x.clamp(0, hi),
            y: self.y.clamp(0, hi),
        }
    }
}

impl fmt::Display for BinCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Coordinate axis named by [`Error::DegenerateBoundingBox`](crate::Error::DegenerateBoundingBox).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Both axes at once (all points coincide).
    Both,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Both => "x and y",
        })
    }
}

/// Number of bins per axis for bins of side `delta / 2` over the unit square.
///
/// `ceil(1 / (delta / 2))`. Saturates at `i64::MAX` for vanishing `delta`.
#[inline]
pub fn grid_dim(delta: f64) -> i64 {
    debug_assert!(delta > 0.0, "grid dimension is undefined for delta <= 0");
    ceil_to_i64(1.0 / (0.5 * delta)).max(1)
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; bins beyond i64 are clamped anyway."
)]
pub(crate) fn floor_to_i64(v: f64) -> i64 {
    v.floor() as i64
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; bins beyond i64 are clamped anyway."
)]
pub(crate) fn ceil_to_i64(v: f64) -> i64 {
    v.ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_of_floors_by_half_delta() {
        let b = BinCoord::of(Point::new(0.35, 0.05), 0.2);
        assert_eq!(b, BinCoord::new(3, 0));
        let origin = BinCoord::of(Point::ORIGIN, 0.2);
        assert_eq!(origin, BinCoord::new(0, 0));
    }

    #[test]
    fn clamp_pulls_far_edge_into_last_bin() {
        // 1.0 / 0.25 lands exactly on bin 4 of a 4-wide grid.
        let raw = BinCoord::of(Point::new(1.0, 1.0), 0.5);
        assert_eq!(raw, BinCoord::new(4, 4));
        assert_eq!(grid_dim(0.5), 4);
        assert_eq!(raw.clamp(grid_dim(0.5)), BinCoord::new(3, 3));
    }

    #[test]
    fn grid_dim_rounds_up() {
        assert_eq!(grid_dim(0.3), 7);
        assert_eq!(grid_dim(2.0), 1);
        assert_eq!(grid_dim(5.0), 1);
    }

    #[test]
    fn grid_dim_saturates_for_tiny_delta() {
        assert_eq!(grid_dim(f64::MIN_POSITIVE), i64::MAX);
    }
}
