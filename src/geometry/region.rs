// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region and DeskLength value types.
//!
//! A Region is a half-open rectangle of grid cells: rows in `[r1, r2)` and
//! columns in `[c1, c2)`. Coordinates are signed, so a sub-region computed past
//! the far edge of its parent (e.g. `r1 + length + 1 > r2`) is simply empty.
//!
//! # Examples
//!
//! ```
//! use room_planner::geometry::{DeskLength, Region};
//!
//! let room = Region::with_size(3, 9);
//! assert_eq!(room.height(), 3);
//! assert_eq!(room.width(), 9);
//! assert!(!room.is_empty());
//!
//! let past_edge = Region::new(4, 0, 3, 9);
//! assert!(past_edge.is_empty());
//!
//! let length = DeskLength::new(3);
//! assert_eq!(length.get(), 3);
//! ```

use std::fmt;

/// A half-open axis-aligned rectangle of cells.
///
/// Height and width are always derived from the corners, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// First row (inclusive).
    pub r1: i32,
    /// First column (inclusive).
    pub c1: i32,
    /// Last row (exclusive).
    pub r2: i32,
    /// Last column (exclusive).
    pub c2: i32,
}

impl Region {
    /// Create a region from its corners.
    pub const fn new(r1: i32, c1: i32, r2: i32, c2: i32) -> Self {
        Self { r1, c1, r2, c2 }
    }

    /// Create a region anchored at the origin with the given number of rows and columns.
    pub const fn with_size(rows: i32, columns: i32) -> Self {
        Self::new(0, 0, rows, columns)
    }

    /// Number of rows (may be zero or negative for empty regions).
    #[inline]
    pub const fn height(&self) -> i32 {
        self.r2 - self.r1
    }

    /// Number of columns (may be zero or negative for empty regions).
    #[inline]
    pub const fn width(&self) -> i32 {
        self.c2 - self.c1
    }

    /// A region with no rows or no columns carries no placement.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.height() <= 0 || self.width() <= 0
    }

    /// A non-empty region exactly one cell high or one cell wide.
    #[inline]
    pub const fn is_strip(&self) -> bool {
        !self.is_empty() && (self.height() == 1 || self.width() == 1)
    }

    /// Number of cells, zero when empty.
    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.height() as usize * self.width() as usize
        }
    }

    /// Top-left corner `(r1, c1)`.
    #[inline]
    pub const fn origin(&self) -> (i32, i32) {
        (self.r1, self.c1)
    }

    /// Check whether a cell lies inside the region.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        (self.r1..self.r2).contains(&row) && (self.c1..self.c2).contains(&col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let Region { r1, c1, r2, c2 } = *self;
        (r1..r2).flat_map(move |row| (c1..c2).map(move |col| (row, col)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{})x[{}..{}) ({}x{})",
            self.r1,
            self.r2,
            self.c1,
            self.c2,
            self.height(),
            self.width()
        )
    }
}

/// Length of every desk placed during one solve.
///
/// This is a newtype wrapper so a desk length cannot be confused with a
/// coordinate or a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeskLength(i32);

impl DeskLength {
    /// Create a new desk length, panicking if it is not positive.
    ///
    /// # Panics
    ///
    /// Panics if `value < 1`.
    pub fn new(value: i32) -> Self {
        assert!(value >= 1, "Desk length must be positive: {}", value);
        Self(value)
    }

    /// Try to create a new desk length, returning None if it is not positive.
    pub fn try_new(value: i32) -> Option<Self> {
        if value >= 1 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Get the length as a usize (for count arithmetic).
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DeskLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_dimensions() {
        let region = Region::new(2, 3, 7, 11);
        assert_eq!(region.height(), 5);
        assert_eq!(region.width(), 8);
        assert_eq!(region.area(), 40);
        assert_eq!(region.origin(), (2, 3));
    }

    #[test]
    fn test_empty_regions() {
        assert!(Region::new(0, 0, 0, 5).is_empty());
        assert!(Region::new(0, 0, 5, 0).is_empty());
        assert!(Region::new(6, 0, 5, 5).is_empty());
        assert_eq!(Region::new(6, 0, 5, 5).area(), 0);
        assert!(!Region::new(6, 0, 5, 5).is_strip());
    }

    #[test]
    fn test_strip_detection() {
        assert!(Region::with_size(1, 7).is_strip());
        assert!(Region::with_size(7, 1).is_strip());
        assert!(Region::with_size(1, 1).is_strip());
        assert!(!Region::with_size(2, 7).is_strip());
    }

    #[test]
    fn test_contains_is_half_open() {
        let region = Region::new(1, 1, 3, 4);
        assert!(region.contains(1, 1));
        assert!(region.contains(2, 3));
        assert!(!region.contains(3, 3));
        assert!(!region.contains(2, 4));
        assert!(!region.contains(0, 2));
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = Region::new(1, 2, 3, 4).cells().collect();
        assert_eq!(cells, vec![(1, 2), (1, 3), (2, 2), (2, 3)]);
        assert_eq!(Region::new(0, 0, 0, 3).cells().count(), 0);
    }

    #[test]
    fn test_desk_length() {
        assert_eq!(DeskLength::new(3).get(), 3);
        assert_eq!(DeskLength::new(7).as_usize(), 7);
        assert!(DeskLength::try_new(0).is_none());
        assert!(DeskLength::try_new(-2).is_none());
        assert!(DeskLength::try_new(1).is_some());
    }

    #[test]
    #[should_panic(expected = "Desk length must be positive")]
    fn test_desk_length_zero_panics() {
        DeskLength::new(0);
    }
}
