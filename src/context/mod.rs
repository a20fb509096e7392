// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve context: the state shared by every recursive call of a batch.
//!
//! The SolveContext owns:
//! - the memo table (write-once, grows for the whole batch)
//! - the split policy and strip rule of the active problem variant
//! - statistics about shortcuts, memo hits and candidates
//!
//! The cache is passed explicitly rather than living in a global, so its
//! lifetime is the lifetime of the context. The solver borrows the context
//! mutably, which rules out concurrent writers by construction.
//!
//! # Example
//!
//! ```
//! use room_planner::config::SolverConfig;
//! use room_planner::context::SolveContext;
//! use room_planner::geometry::{DeskLength, Region};
//! use room_planner::variant::ProblemVariant;
//!
//! let mut ctx = SolveContext::for_variant(ProblemVariant::Level4, &SolverConfig::default());
//! let placement = ctx.solve(Region::with_size(1, 11), DeskLength::new(3));
//! assert_eq!(placement.desk_count(), 9);
//! ```

use crate::config::SolverConfig;
use crate::geometry::{DeskLength, Placement, Region};
use crate::memo::MemoTable;
use crate::solver::{RegionSolver, StripRule};
use crate::split::SplitPolicy;
use crate::state::Statistics;
use crate::variant::ProblemVariant;

#[derive(Debug)]
pub struct SolveContext {
    /// Relative placements of every shape solved so far.
    pub memo: MemoTable,
    pub policy: SplitPolicy,
    pub strip_rule: StripRule,
    pub statistics: Statistics,
}

impl SolveContext {
    /// Create a context with an empty memo table.
    pub fn new(strip_rule: StripRule, config: &SolverConfig) -> Self {
        Self {
            memo: MemoTable::new(),
            policy: SplitPolicy::new(config.spiral_search_limit),
            strip_rule,
            statistics: Statistics::new(),
        }
    }

    /// Create a context for the strip rule of a problem variant.
    pub fn for_variant(variant: ProblemVariant, config: &SolverConfig) -> Self {
        Self::new(variant.strip_rule(), config)
    }

    /// Solve `region` with desks of `length`.
    pub fn solve(&mut self, region: Region, length: DeskLength) -> Placement {
        RegionSolver::new(self, length).solve(region)
    }

    /// Forget all memoized shapes and statistics.
    pub fn reset(&mut self) {
        self.memo.clear();
        self.statistics.reset();
    }
}

impl Default for SolveContext {
    fn default() -> Self {
        Self::new(StripRule::ExactFit, &SolverConfig::default())
    }
}
