// Copyright 2025 the Nearpair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operation counters returned with every run.

use core::ops::AddAssign;

/// Cost counters for one run, threaded through the state machine.
///
/// The counters are diagnostic only; they let a caller compare the incremental
/// kernel against the quadratic oracle without any global state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Neighbour bins enumerated around each inserted point (≤ 25 per probe window).
    pub bins_enumerated: usize,
    /// Neighbour bins actually looked up in the bin map.
    pub bins_probed: usize,
    /// Points re-binned while rebuilding the grid.
    pub points_rebinned: usize,
    /// Number of full grid rebuilds.
    pub rebuilds: usize,
    /// Extra probes of the same window after `delta` shrank mid-step.
    pub requeries: usize,
}

impl Metrics {
    /// Total elementary operations: bins enumerated, bins probed, and points re-binned.
    pub fn operations(&self) -> usize {
        self.bins_enumerated + self.bins_probed + self.points_rebinned
    }
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, rhs: Self) {
        self.bins_enumerated += rhs.bins_enumerated;
        self.bins_probed += rhs.bins_probed;
        self.points_rebinned += rhs.points_rebinned;
        self.rebuilds += rhs.rebuilds;
        self.requeries += rhs.requeries;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_excludes_rebuild_and_requery_tallies() {
        let m = Metrics {
            bins_enumerated: 25,
            bins_probed: 10,
            points_rebinned: 4,
            rebuilds: 1,
            requeries: 2,
        };
        assert_eq!(m.operations(), 39);
    }

    #[test]
    fn add_assign_sums_fieldwise() {
        let mut a = Metrics {
            rebuilds: 1,
            ..Default::default()
        };
        a += Metrics {
            rebuilds: 2,
            bins_probed: 3,
            ..Default::default()
        };
        assert_eq!(a.rebuilds, 3);
        assert_eq!(a.bins_probed, 3);
    }
}
