// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Turning placements into text: solution files, console grids and animation.

pub mod animation;
pub mod grid;

pub use animation::Animator;
pub use grid::Grid;
