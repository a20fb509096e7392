// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem variants.
//!
//! Each level fixes the strip rule, how the goal of a room is checked, and
//! either a desk length shared by all rooms or a length read per room.
//!
//! | Level | Desk length | Strip rule | Goal counts |
//! |-------|-------------|------------|-------------|
//! | `level4` | 3 | exact fit | desks |
//! | `level5` | 2 | exact fit | desks |
//! | `level6` | per room | exact fit | desks |
//! | `level7` | 7 | up to length | cells |
//!
//! # Examples
//!
//! ```
//! use room_planner::variant::{GoalRule, ProblemVariant};
//!
//! let level: ProblemVariant = "level7".parse().unwrap();
//! assert_eq!(level.goal_rule(), GoalRule::CellCount);
//! assert_eq!(level.to_string(), "level7");
//! ```

use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString};

use crate::geometry::{DeskLength, Placement};
use crate::solver::StripRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ProblemVariant {
    Level4,
    Level5,
    Level6,
    Level7,
}

impl ProblemVariant {
    /// Desk length shared by every room, or `None` when each room carries its own.
    pub fn fixed_length(self) -> Option<DeskLength> {
        match self {
            ProblemVariant::Level4 => Some(DeskLength::new(3)),
            ProblemVariant::Level5 => Some(DeskLength::new(2)),
            ProblemVariant::Level6 => None,
            ProblemVariant::Level7 => Some(DeskLength::new(7)),
        }
    }

    pub fn strip_rule(self) -> StripRule {
        match self {
            ProblemVariant::Level7 => StripRule::UpTo,
            _ => StripRule::ExactFit,
        }
    }

    pub fn goal_rule(self) -> GoalRule {
        match self {
            ProblemVariant::Level7 => GoalRule::CellCount,
            _ => GoalRule::DeskCount,
        }
    }

    /// Number of integers on one room line.
    pub fn fields_per_room(self) -> usize {
        if self.fixed_length().is_some() {
            3
        } else {
            4
        }
    }
}

/// How a placement is measured against a room's goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalRule {
    /// Whole desks: desk cells divided by the desk length.
    DeskCount,
    /// Occupied desk cells.
    CellCount,
}

impl GoalRule {
    pub fn achieved(self, placement: &Placement, length: DeskLength) -> usize {
        self.measure(placement.desk_count(), length)
    }

    /// Measure a raw desk cell count.
    pub fn measure(self, desk_cells: usize, length: DeskLength) -> usize {
        match self {
            GoalRule::DeskCount => desk_cells / length.as_usize(),
            GoalRule::CellCount => desk_cells,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            GoalRule::DeskCount => "desks",
            GoalRule::CellCount => "cells",
        }
    }
}
