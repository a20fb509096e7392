// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of the room planner.
//!
//! Places as many fixed-length straight desks as possible into rectangular
//! rooms. Desks may not touch each other along an edge; they may touch at
//! corners.
//!
//! # Architecture
//!
//! The solver is recursive divide-and-conquer over rectangular regions:
//!
//! 1. **Strip shortcut**: regions one cell thick are solved directly.
//! 2. **Memo lookup**: every solved shape is kept, relative to its origin,
//!    and reused for the same shape or its transpose anywhere in any room.
//! 3. **Split search**: the region is cut by split lines (cells that stay
//!    empty) into independent sections, each solved recursively. A
//!    [`split::SplitPolicy`] decides between forced greedy cuts for large
//!    regions and an exhaustive scan for small ones.
//!
//! Candidates are compared by desk-cell count only; just the winning split
//! is materialized into cells.
//!
//! # State
//!
//! All mutable state lives in a [`SolveContext`]: the memo table, the policy
//! of the active [`ProblemVariant`] and [`state::Statistics`]. A
//! [`batch::BatchRunner`] shares one context across every room and file of
//! a level directory.

pub mod batch;
pub mod config;
pub mod context;
pub mod error;
pub mod files;
pub mod geometry;
pub mod memo;
pub mod render;
pub mod solver;
pub mod split;
pub mod state;
pub mod symmetry;
pub mod variant;

// Re-export commonly used types
pub use batch::{BatchRunner, FileReport};
pub use config::{RenderConfig, SolverConfig};
pub use context::SolveContext;
pub use error::PlannerError;
pub use geometry::{DeskLength, Placement, Region};
pub use solver::{RegionSolver, StripRule};
pub use variant::{GoalRule, ProblemVariant};
