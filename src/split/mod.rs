// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Split policy: which decompositions the solver tries for a region.
//!
//! The regime is a pure function of `(height, width, length)`. With
//! `limit = 4 * length + 4`, in priority order:
//!
//! 1. **Greedy rows**: `height > limit` and `width` odd. Carve a strip of
//!    `length` rows off the top, one split row, recurse on the rest.
//! 2. **Greedy columns**: `width > limit` and `height` odd. Same, on columns.
//! 3. **Spiral border**: both dimensions exceed `limit`. Peel a ring of
//!    thickness `length` into four blocks around a central core.
//! 4. **Exhaustive**: every split row, every split column and, when both
//!    dimensions are below the spiral search limit, every spiral.
//!
//! The first three are single candidates that keep very large rooms tractable
//! at the cost of optimality. The exhaustive spiral term has O(n^4) candidates.
//!
//! # Examples
//!
//! ```
//! use room_planner::geometry::DeskLength;
//! use room_planner::split::{Regime, SplitPolicy};
//!
//! let policy = SplitPolicy::default();
//! let length = DeskLength::new(2);
//! assert_eq!(policy.regime(15, 5, length), Regime::GreedyRows);
//! assert_eq!(policy.regime(14, 14, length), Regime::SpiralBorder);
//! assert_eq!(policy.regime(8, 8, length), Regime::Exhaustive { spirals: true });
//! ```

pub mod decomposition;

pub use decomposition::{Sections, Split};

use crate::geometry::{DeskLength, Region};
use std::iter;

/// Default bound (exclusive) on both dimensions for the exhaustive spiral search.
pub const DEFAULT_SPIRAL_SEARCH_LIMIT: i32 = 21;

/// Size above which a dimension is handled greedily.
#[inline]
pub fn split_limit(length: DeskLength) -> i32 {
    length.get().saturating_mul(4).saturating_add(4)
}

/// Splitting strategy chosen for a region size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    GreedyRows,
    GreedyColumns,
    SpiralBorder,
    Exhaustive { spirals: bool },
}

impl Regime {
    /// A forced regime has a single candidate that is taken unconditionally.
    pub fn is_forced(self) -> bool {
        !matches!(self, Regime::Exhaustive { .. })
    }
}

/// Candidate decompositions for one region.
pub struct Plan {
    pub regime: Regime,
    pub candidates: Box<dyn Iterator<Item = Split>>,
}

/// Stateless decision logic, parameterized only by the spiral search cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPolicy {
    spiral_search_limit: i32,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SPIRAL_SEARCH_LIMIT)
    }
}

impl SplitPolicy {
    pub fn new(spiral_search_limit: i32) -> Self {
        Self {
            spiral_search_limit,
        }
    }

    pub fn spiral_search_limit(&self) -> i32 {
        self.spiral_search_limit
    }

    /// Pick the regime for a region of the given size.
    pub fn regime(&self, height: i32, width: i32, length: DeskLength) -> Regime {
        let limit = split_limit(length);
        if height > limit && width % 2 == 1 {
            Regime::GreedyRows
        } else if width > limit && height % 2 == 1 {
            Regime::GreedyColumns
        } else if height > limit && width > limit {
            Regime::SpiralBorder
        } else {
            Regime::Exhaustive {
                spirals: height < self.spiral_search_limit && width < self.spiral_search_limit,
            }
        }
    }

    /// Regime and candidate decompositions for `region`.
    pub fn plan(&self, region: Region, length: DeskLength) -> Plan {
        let regime = self.regime(region.height(), region.width(), length);
        let Region { r1, c1, r2, c2 } = region;
        let len = length.get();
        let candidates: Box<dyn Iterator<Item = Split>> = match regime {
            Regime::GreedyRows => Box::new(iter::once(Split::Horizontal { row: r1 + len })),
            Regime::GreedyColumns => Box::new(iter::once(Split::Vertical { col: c1 + len })),
            Regime::SpiralBorder => Box::new(iter::once(Split::Spiral {
                rl: r1 + len,
                cu: c2 - len - 1,
                rr: r2 - len - 1,
                cd: c1 + len,
            })),
            Regime::Exhaustive { spirals } => {
                let rows = (r1 + 1..r2).map(|row| Split::Horizontal { row });
                let cols = (c1 + 1..c2).map(|col| Split::Vertical { col });
                let rings = spirals.then(|| spiral_candidates(region)).into_iter().flatten();
                Box::new(rows.chain(cols).chain(rings))
            }
        };
        Plan { regime, candidates }
    }
}

/// Every spiral with `r1 <= rl < rr < r2` and `c1 <= cd < cu < c2`.
fn spiral_candidates(region: Region) -> impl Iterator<Item = Split> {
    let Region { r1, c1, r2, c2 } = region;
    (r1..r2).flat_map(move |rl| {
        (c1..c2).flat_map(move |cu| {
            (rl + 1..r2).flat_map(move |rr| (c1..cu).map(move |cd| Split::Spiral { rl, cu, rr, cd }))
        })
    })
}
