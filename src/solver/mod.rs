// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive region solver.
//!
//! `solve(region)` resolves a region in this order:
//!
//! 1. Empty regions give an empty placement.
//! 2. Short strips are decided by the strip rule, bypassing the memo table.
//! 3. A memo hit (direct or transposed) is translated into the region.
//! 4. Otherwise the split policy supplies candidate decompositions. Each
//!    candidate is scored by the desk cells of its sections; the strictly
//!    best one wins and ties keep the first. Only the winner is turned into
//!    cells: its split lines first, then its sections in order.
//! 5. The result is stored in the memo table relative to the region origin.
//!
//! Forced regimes (greedy strips, spiral border) have a single candidate that
//! is taken even when it places nothing. In the exhaustive regime a candidate
//! must place at least one desk cell to be taken.

pub mod strip;

pub use strip::StripRule;

use tracing::{debug, trace};

use crate::context::SolveContext;
use crate::geometry::{DeskLength, Placement, Region};
use crate::memo::MemoKey;
use crate::split::{Regime, Split};
use crate::state::Counters;
use crate::symmetry::Orientation;

/// Solver for one desk length, borrowing the batch context.
pub struct RegionSolver<'ctx> {
    ctx: &'ctx mut SolveContext,
    length: DeskLength,
}

impl<'ctx> RegionSolver<'ctx> {
    pub fn new(ctx: &'ctx mut SolveContext, length: DeskLength) -> Self {
        Self { ctx, length }
    }

    /// Compute a placement for `region`.
    pub fn solve(&mut self, region: Region) -> Placement {
        if region.is_empty() {
            return Placement::new();
        }
        if let Some(placement) = self.ctx.strip_rule.shortcut(region, self.length) {
            self.ctx.statistics.increment(Counters::StripShortcuts);
            return placement;
        }
        if let Some(placement) = self.recall(region) {
            return placement;
        }

        let best = self.search(region);
        let key = MemoKey::of(region, self.length);
        if self.ctx.memo.store(key, best.relative_to(region)) {
            self.ctx.statistics.increment(Counters::MemoStores);
            debug!(
                height = key.height,
                width = key.width,
                length = key.length,
                desk_cells = best.desk_count(),
                "memoized"
            );
        }
        best
    }

    /// Desk cells `solve(region)` would place, without building cells when
    /// the answer is already known.
    fn desk_cells(&mut self, region: Region) -> usize {
        if region.is_empty() {
            return 0;
        }
        if let Some(count) = self.ctx.strip_rule.shortcut_count(region, self.length) {
            return count;
        }
        match self.ctx.memo.desk_count(MemoKey::of(region, self.length)) {
            Some(count) => count,
            None => self.solve(region).desk_count(),
        }
    }

    fn recall(&mut self, region: Region) -> Option<Placement> {
        let (placement, orientation) = self.ctx.memo.recall(region, self.length)?;
        let counter = match orientation {
            Orientation::Identity => Counters::MemoHits,
            Orientation::Transposed => Counters::TransposedMemoHits,
        };
        self.ctx.statistics.increment(counter);
        Some(placement)
    }

    fn search(&mut self, region: Region) -> Placement {
        let plan = self.ctx.policy.plan(region, self.length);
        self.ctx.statistics.increment(match plan.regime {
            Regime::GreedyRows | Regime::GreedyColumns => Counters::GreedySplits,
            Regime::SpiralBorder => Counters::SpiralBorderSplits,
            Regime::Exhaustive { .. } => Counters::ExhaustiveSearches,
        });
        trace!(%region, regime = ?plan.regime, "searching");

        let chosen = if plan.regime.is_forced() {
            plan.candidates.into_iter().next()
        } else {
            self.best_candidate(region, plan.candidates)
        };
        match chosen {
            Some(split) => self.materialize(region, split),
            None => Placement::new(),
        }
    }

    /// The first candidate with the strictly greatest positive desk cell count.
    fn best_candidate(
        &mut self,
        region: Region,
        candidates: impl Iterator<Item = Split>,
    ) -> Option<Split> {
        let mut best: Option<Split> = None;
        let mut best_cells = 0;
        for split in candidates {
            self.ctx.statistics.increment(Counters::CandidatesScored);
            let cells: usize = split
                .sections(region)
                .iter()
                .map(|&section| self.desk_cells(section))
                .sum();
            if cells > best_cells {
                best = Some(split);
                best_cells = cells;
            }
        }
        best
    }

    fn materialize(&mut self, region: Region, split: Split) -> Placement {
        let mut placement = Placement::new();
        split.mark_split_lines(region, &mut placement);
        for &section in split.sections(region).iter() {
            let part = self.solve(section);
            placement.append(part);
        }
        placement
    }
}
