// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transposition of cached placements.

use crate::geometry::Cell;

/// How a cached relative placement maps onto the region it is reused for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The entry was stored for the same (height, width).
    Identity,
    /// The entry was stored for (width, height); swap every offset pair.
    Transposed,
}

impl Orientation {
    /// Map a relative cell from the stored entry's frame to the lookup's frame.
    #[inline]
    pub fn apply(self, cell: Cell) -> Cell {
        match self {
            Orientation::Identity => cell,
            Orientation::Transposed => cell.transposed(),
        }
    }
}

/// Swap the height and width of a `(height, width, length)` triple.
#[inline]
pub fn transposed_key((height, width, length): (i32, i32, i32)) -> (i32, i32, i32) {
    (width, height, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_keeps_cell() {
        let cell = Cell::split(1, 2);
        assert_eq!(Orientation::Identity.apply(cell), cell);
    }

    #[test]
    fn test_transposed_swaps_offsets() {
        assert_eq!(Orientation::Transposed.apply(Cell::desk(0, 5)), Cell::desk(5, 0));
        assert_eq!(transposed_key((2, 7, 3)), (7, 2, 3));
    }
}
