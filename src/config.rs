// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-scoped configuration.
//!
//! | Parameter | Default | Description |
//! |-----------|---------|-------------|
//! | `spiral_search_limit` | 21 | Exhaustive spiral search only below this size in both dimensions |
//! | `animation` | 0 ms | Delay per animation frame; zero disables animation |
//! | `max_animated_extent` | 40 | Rooms larger than this in either dimension are not animated |
//! | `show_grids` | false | Print every solved room as an emoji grid |
//! | `glyphs` | 🟦 🟨 🟫 | Desk, split and empty markers for console grids |

use std::time::Duration;

use crate::split::DEFAULT_SPIRAL_SEARCH_LIMIT;

/// Tunables of the solver core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Both dimensions must be below this for the exhaustive spiral search.
    pub spiral_search_limit: i32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            spiral_search_limit: DEFAULT_SPIRAL_SEARCH_LIMIT,
        }
    }
}

/// Markers used when drawing a grid on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub desk: String,
    pub split: String,
    pub empty: String,
}

impl Glyphs {
    pub fn new(desk: &str, split: &str, empty: &str) -> Self {
        Self {
            desk: desk.to_string(),
            split: split.to_string(),
            empty: empty.to_string(),
        }
    }

    /// Plain ASCII markers, for terminals without emoji.
    pub fn ascii() -> Self {
        Self::new("X", "~", ".")
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new("🟦", "🟨", "🟫")
    }
}

/// Console presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub animation: Duration,
    pub max_animated_extent: i32,
    pub show_grids: bool,
    pub glyphs: Glyphs,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            animation: Duration::ZERO,
            max_animated_extent: 40,
            show_grids: false,
            glyphs: Glyphs::default(),
        }
    }
}

impl RenderConfig {
    /// Whether a room of this size is animated.
    pub fn animates(&self, rows: i32, columns: i32) -> bool {
        !self.animation.is_zero()
            && rows <= self.max_animated_extent
            && columns <= self.max_animated_extent
    }
}
