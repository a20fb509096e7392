// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decompositions of a region into sub-regions separated by split lines.
//!
//! ```text
//!  Horizontal          Vertical            Spiral
//!
//!  ...........         ......@.....        r1/c1      cu
//!  ...upper...         ......@.....          ........@......
//!  @@@@@@@@@@@ row     .left.@right        ...(1)...@..(2)
//!  ...........         ......@.....   rl   @@@@@@@@@@......
//!  ...lower...         ......@.....          ...@.(5)@......
//!  ...........            col           rr   ...@@@@@@@@@@@@
//!                                            (4)@....(3)....
//!                                               cd
//! ```
//!
//! Every split-line cell belongs to no section, so desks in different
//! sections never touch.

use crate::geometry::{Cell, Placement, Region};

/// One way of cutting a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Split line along `row`: sections above and below it.
    Horizontal { row: i32 },
    /// Split line along `col`: sections left and right of it.
    Vertical { col: i32 },
    /// Five-way spiral partition around an inner ring `(rl, cu, rr, cd)`.
    Spiral { rl: i32, cu: i32, rr: i32, cd: i32 },
}

/// The sub-regions of one decomposition, in placement order.
#[derive(Debug, Clone, Copy)]
pub struct Sections {
    regions: [Region; 5],
    len: usize,
}

impl Sections {
    fn two(first: Region, second: Region) -> Self {
        let empty = Region::new(0, 0, 0, 0);
        Self {
            regions: [first, second, empty, empty, empty],
            len: 2,
        }
    }

    fn five(regions: [Region; 5]) -> Self {
        Self { regions, len: 5 }
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.regions[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.as_slice().iter()
    }
}

impl Split {
    /// Sub-regions of `region` left after removing the split lines.
    pub fn sections(&self, region: Region) -> Sections {
        let Region { r1, c1, r2, c2 } = region;
        match *self {
            Split::Horizontal { row } => {
                Sections::two(Region::new(r1, c1, row, c2), Region::new(row + 1, c1, r2, c2))
            }
            Split::Vertical { col } => {
                Sections::two(Region::new(r1, c1, r2, col), Region::new(r1, col + 1, r2, c2))
            }
            Split::Spiral { rl, cu, rr, cd } => Sections::five([
                Region::new(r1, c1, rl, cu),
                Region::new(r1, cu + 1, rr, c2),
                Region::new(rr + 1, cd + 1, r2, c2),
                Region::new(rl + 1, c1, r2, cd),
                Region::new(rl + 1, cd + 1, rr, cu),
            ]),
        }
    }

    /// Append the split-line cells of this decomposition to `placement`.
    ///
    /// The four spiral lines cross, so a spiral marks some cells twice.
    pub fn mark_split_lines(&self, region: Region, placement: &mut Placement) {
        let Region { r1, c1, r2, c2 } = region;
        match *self {
            Split::Horizontal { row } => {
                (c1..c2).for_each(|col| placement.push(Cell::split(row, col)));
            }
            Split::Vertical { col } => {
                (r1..r2).for_each(|row| placement.push(Cell::split(row, col)));
            }
            Split::Spiral { rl, cu, rr, cd } => {
                (c1..=cu).for_each(|col| placement.push(Cell::split(rl, col)));
                (cd..c2).for_each(|col| placement.push(Cell::split(rr, col)));
                (r1..=rr).for_each(|row| placement.push(Cell::split(row, cu)));
                (rl..r2).for_each(|row| placement.push(Cell::split(row, cd)));
            }
        }
    }
}
