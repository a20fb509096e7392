// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Degenerate strip rule for regions one cell high or one cell wide.
//!
//! Strips short enough to hold at most one desk are answered directly and
//! never reach the memo table. Longer strips are left to the split search,
//! which places several desks along them.

use crate::geometry::{DeskLength, Placement, Region};

/// How a short strip is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripRule {
    /// A strip is one desk only when it is exactly `length` long; shorter strips stay empty.
    ExactFit,
    /// Any strip of at most `length` cells is filled completely.
    UpTo,
}

impl StripRule {
    /// Desk cell count of `region` when the rule decides it, `None` otherwise.
    pub fn shortcut_count(self, region: Region, length: DeskLength) -> Option<usize> {
        if !region.is_strip() {
            return None;
        }
        let span = region.height().max(region.width());
        let len = length.get();
        match self {
            StripRule::ExactFit if span < len => Some(0),
            StripRule::ExactFit if span == len => Some(region.area()),
            StripRule::UpTo if span <= len => Some(region.area()),
            _ => None,
        }
    }

    /// Placement of `region` when the rule decides it, `None` otherwise.
    pub fn shortcut(self, region: Region, length: DeskLength) -> Option<Placement> {
        self.shortcut_count(region, length).map(|desks| {
            if desks == 0 {
                Placement::new()
            } else {
                Placement::filled(region)
            }
        })
    }
}
