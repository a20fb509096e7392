// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Placement: the ordered, role-tagged cells produced by a solve.
//!
//! A placement keeps the order in which cells were produced, which is what the
//! animation replays. For correctness only the set of desk cells matters.
//!
//! # Examples
//!
//! ```
//! use room_planner::geometry::{Cell, Placement, Region};
//!
//! let mut placement = Placement::filled(Region::new(0, 0, 1, 3));
//! placement.push(Cell::split(1, 0));
//! assert_eq!(placement.desk_count(), 3);
//! assert_eq!(placement.len(), 4);
//! ```

use crate::geometry::{Cell, Region};
use crate::symmetry::Orientation;

/// Ordered sequence of occupied cells.
///
/// The number of desk cells is tracked incrementally, since candidate
/// comparison only ever needs that count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    cells: Vec<Cell>,
    desks: usize,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            desks: 0,
        }
    }

    /// Every cell of `region` as a desk cell, in row-major order.
    pub fn filled(region: Region) -> Self {
        let mut placement = Self::with_capacity(region.area());
        for (row, col) in region.cells() {
            placement.push(Cell::desk(row, col));
        }
        placement
    }

    pub fn push(&mut self, cell: Cell) {
        if cell.is_desk() {
            self.desks += 1;
        }
        self.cells.push(cell);
    }

    /// Move all cells of `other` to the end of this placement.
    pub fn append(&mut self, mut other: Placement) {
        self.desks += other.desks;
        self.cells.append(&mut other.cells);
    }

    /// Number of desk cells.
    #[inline]
    pub fn desk_count(&self) -> usize {
        self.desks
    }

    /// Number of cells of any role.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Coordinates of the desk cells only.
    pub fn desk_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_desk())
            .map(|cell| (cell.row, cell.col))
    }

    /// Coordinates of the split-line cells only.
    pub fn split_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .filter(|cell| !cell.is_desk())
            .map(|cell| (cell.row, cell.col))
    }

    /// Re-express the cells as offsets from the origin of `region`.
    pub fn relative_to(&self, region: Region) -> Placement {
        let (r1, c1) = region.origin();
        self.map_cells(|cell| cell.translated(-r1, -c1))
    }

    /// Place relative cells into `region`, transposing them first when the
    /// stored entry belongs to the swapped dimensions.
    pub fn anchored_at(&self, region: Region, orientation: Orientation) -> Placement {
        let (r1, c1) = region.origin();
        self.map_cells(|cell| orientation.apply(cell).translated(r1, c1))
    }

    fn map_cells(&self, f: impl Fn(Cell) -> Cell) -> Placement {
        Placement {
            cells: self.cells.iter().map(|&cell| f(cell)).collect(),
            desks: self.desks,
        }
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_row_major() {
        let placement = Placement::filled(Region::new(1, 1, 2, 4));
        let cells: Vec<_> = placement.desk_cells().collect();
        assert_eq!(cells, vec![(1, 1), (1, 2), (1, 3)]);
        assert_eq!(placement.desk_count(), 3);
    }

    #[test]
    fn test_split_cells_not_counted() {
        let mut placement = Placement::new();
        placement.push(Cell::split(0, 0));
        placement.push(Cell::split(0, 1));
        placement.push(Cell::desk(1, 0));
        assert_eq!(placement.desk_count(), 1);
        assert_eq!(placement.len(), 3);
        assert_eq!(placement.split_cells().count(), 2);
    }

    #[test]
    fn test_append_keeps_order_and_count() {
        let mut first = Placement::filled(Region::new(0, 0, 1, 2));
        let mut second = Placement::new();
        second.push(Cell::split(1, 0));
        second.push(Cell::desk(2, 0));
        first.append(second);
        assert_eq!(first.desk_count(), 3);
        assert_eq!(first.cells()[2], Cell::split(1, 0));
        assert_eq!(first.cells()[3], Cell::desk(2, 0));
    }

    #[test]
    fn test_relative_then_anchored() {
        let region = Region::new(4, 6, 5, 9);
        let relative = Placement::filled(region).relative_to(region);
        let offsets: Vec<_> = relative.desk_cells().collect();
        assert_eq!(offsets, vec![(0, 0), (0, 1), (0, 2)]);

        let moved = relative.anchored_at(Region::new(10, 20, 11, 23), Orientation::Identity);
        let cells: Vec<_> = moved.desk_cells().collect();
        assert_eq!(cells, vec![(10, 20), (10, 21), (10, 22)]);
    }

    #[test]
    fn test_anchored_transposed() {
        // A 1x3 entry reused for a 3x1 region.
        let relative = Placement::filled(Region::with_size(1, 3));
        let moved = relative.anchored_at(Region::new(5, 7, 8, 8), Orientation::Transposed);
        let cells: Vec<_> = moved.desk_cells().collect();
        assert_eq!(cells, vec![(5, 7), (6, 7), (7, 7)]);
        assert_eq!(moved.desk_count(), 3);
    }
}
