// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for room planning.
//!
//! This module contains type-safe representations of the planning primitives:
//! - Region: half-open rectangle of cells
//! - DeskLength: desk size for one solve
//! - Cell / CellRole: one occupied position, desk or split line
//! - Placement: ordered, role-tagged cells

pub mod cell;
pub mod placement;
pub mod region;

// Re-export for convenience
pub use cell::{Cell, CellRole};
pub use placement::Placement;
pub use region::{DeskLength, Region};
