// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input preparation: random permutation and rescaling into the unit square.
//!
//! Both steps are preconditions of the incremental algorithm. The permutation is
//! what makes a rebuild at step `i` happen with probability at most `2 / i`; the
//! rescaling bounds the grid to `[0, 1]²` so its dimension follows from `delta`
//! alone.

use kurbo::{Point, Rect};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Error;
use crate::types::Axis;

/// Shuffle `items` uniformly at random (Fisher–Yates).
///
/// Every permutation, including the identity, is equally likely. This runs on
/// every input, including inputs that already look randomly ordered.
pub fn permute<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Position of the first point with a NaN or infinite coordinate.
pub fn check_finite(points: &[Point]) -> Result<(), Error> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(Error::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

/// Axis-aligned bounding box of `points`, or `None` when empty.
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
    )
}

/// How points are mapped into the unit square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// One scale for both axes: `max(width, height)`.
    ///
    /// Distances shrink by exactly that factor, so results map back to input
    /// units. Only a box with no extent on either axis is degenerate.
    #[default]
    Uniform,
    /// Each axis scaled by its own extent, stretching the box to exactly `[0, 1]²`.
    ///
    /// Distances are distorted unless width equals height, and a zero extent on
    /// either axis is degenerate.
    PerAxis,
}

/// The affine map applied by [`normalize`].
///
/// A point maps to `((x * prescale) - (origin.x * prescale)) / scale_x` on `x`,
/// and likewise on `y`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnitFrame {
    /// Bounding-box minimum, mapped to the origin.
    pub origin: Point,
    /// Factor applied to coordinates before the extent is taken: `1.0`, or `0.5`
    /// when the box is too wide for its extent to be represented.
    pub prescale: f64,
    /// Divisor applied to the prescaled `x - origin.x`.
    pub scale_x: f64,
    /// Divisor applied to the prescaled `y - origin.y`.
    pub scale_y: f64,
}

impl UnitFrame {
    /// Frame for `bounds` under `mode`.
    ///
    /// `bounds` must have finite corners. An extent that overflows `f64` (for
    /// example `-1e308..1e308`) is measured on halved coordinates instead.
    pub fn for_bounds(bounds: Rect, mode: Normalization) -> Result<Self, Error> {
        let prescale = if bounds.width().is_finite() && bounds.height().is_finite() {
            1.0
        } else {
            0.5
        };
        let w = bounds.x1 * prescale - bounds.x0 * prescale;
        let h = bounds.y1 * prescale - bounds.y0 * prescale;
        let (scale_x, scale_y) = match mode {
            Normalization::Uniform => {
                let s = w.max(h);
                if s == 0.0 {
                    return Err(Error::DegenerateBoundingBox { axis: Axis::Both });
                }
                (s, s)
            }
            Normalization::PerAxis => match (w == 0.0, h == 0.0) {
                (true, true) => return Err(Error::DegenerateBoundingBox { axis: Axis::Both }),
                (true, false) => return Err(Error::DegenerateBoundingBox { axis: Axis::X }),
                (false, true) => return Err(Error::DegenerateBoundingBox { axis: Axis::Y }),
                (false, false) => (w, h),
            },
        };
        Ok(Self {
            origin: bounds.origin(),
            prescale,
            scale_x,
            scale_y,
        })
    }

    /// Map an input point into the frame.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        let k = self.prescale;
        Point::new(
            (p.x * k - self.origin.x * k) / self.scale_x,
            (p.y * k - self.origin.y * k) / self.scale_y,
        )
    }

    /// The common scale when both axes share one, i.e. the factor that turns a
    /// unit-square distance back into input units.
    ///
    /// A prescaled frame reports twice its stored scale, which may overflow to
    /// infinity.
    pub fn uniform_scale(&self) -> Option<f64> {
        (self.scale_x == self.scale_y).then_some(self.scale_x / self.prescale)
    }
}

/// Rescale `points` in place into `[0, 1]²` and return the frame used.
///
/// # Errors
///
/// - [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
/// - [`Error::InsufficientPoints`] with `required: 1` if `points` is empty. A
///   single point is enough to normalize against; a run needs
///   [`MIN_POINTS`](crate::MIN_POINTS) and checks that first.
/// - [`Error::DegenerateBoundingBox`] if the box has no extent for `mode`.
pub fn normalize(points: &mut [Point], mode: Normalization) -> Result<UnitFrame, Error> {
    check_finite(points)?;
    let bounds = bounding_box(points).ok_or(Error::InsufficientPoints {
        found: 0,
        required: 1,
    })?;
    let frame = UnitFrame::for_bounds(bounds, mode)?;
    for p in points.iter_mut() {
        *p = frame.apply(*p);
    }
    Ok(frame)
}
