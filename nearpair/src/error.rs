// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for preprocessing and seeding a run.

use thiserror::Error;

use crate::types::Axis;

/// Reasons a closest-pair run is refused before it starts.
///
/// All checks are fail-fast; no partial result is produced. Two coincident
/// points are not an error: they end the run with
/// [`Termination::Coincident`](crate::Termination::Coincident).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer points than the seeding step needs.
    #[error("closest pair needs at least {required} points, got {found}")]
    InsufficientPoints {
        /// Number of points supplied.
        found: usize,
        /// Minimum number of points required.
        required: usize,
    },
    /// The bounding box has no extent to normalize against.
    #[error("bounding box has zero extent along {axis}")]
    DegenerateBoundingBox {
        /// Axis (or axes) with zero extent.
        axis: Axis,
    },
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input; the
        /// [`Site::id`](crate::Site::id) when a run is seeded directly.
        index: usize,
    },
}
