// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The memo table.
//!
//! # Examples
//!
//! ```
//! use room_planner::geometry::{DeskLength, Placement, Region};
//! use room_planner::memo::{MemoKey, MemoTable};
//! use room_planner::symmetry::Orientation;
//!
//! let mut memo = MemoTable::new();
//! let solved = Region::new(0, 0, 1, 3);
//! let length = DeskLength::new(3);
//! memo.store(MemoKey::of(solved, length), Placement::filled(solved).relative_to(solved));
//!
//! // A 3x1 column elsewhere reuses the 1x3 entry, transposed.
//! let (placement, orientation) = memo.recall(Region::new(5, 5, 8, 6), length).unwrap();
//! assert_eq!(orientation, Orientation::Transposed);
//! assert_eq!(placement.desk_cells().collect::<Vec<_>>(), vec![(5, 5), (6, 5), (7, 5)]);
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::geometry::{DeskLength, Placement, Region};
use crate::symmetry::{transposed_key, Orientation};

/// Canonical `(height, width, length)` key of a solved region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub height: i32,
    pub width: i32,
    pub length: i32,
}

impl MemoKey {
    pub const fn new(height: i32, width: i32, length: i32) -> Self {
        Self {
            height,
            width,
            length,
        }
    }

    /// Key of `region` solved with `length`.
    pub fn of(region: Region, length: DeskLength) -> Self {
        Self::new(region.height(), region.width(), length.get())
    }

    /// Key with height and width swapped.
    pub fn transposed(self) -> Self {
        transposed_key(self.into()).into()
    }
}

impl From<MemoKey> for (i32, i32, i32) {
    fn from(key: MemoKey) -> Self {
        (key.height, key.width, key.length)
    }
}

impl From<(i32, i32, i32)> for MemoKey {
    fn from((height, width, length): (i32, i32, i32)) -> Self {
        Self::new(height, width, length)
    }
}

/// Write-once cache of relative placements.
///
/// Each value is relative to its own region's origin: offsets lie in
/// `[0, height) x [0, width)` of the key it was stored under.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: HashMap<MemoKey, Placement>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an entry for `(height, width, length)`, trying the direct key
    /// first and then the transposed key.
    pub fn lookup(&self, key: MemoKey) -> Option<(&Placement, Orientation)> {
        if let Some(entry) = self.entries.get(&key) {
            return Some((entry, Orientation::Identity));
        }
        self.entries
            .get(&key.transposed())
            .map(|entry| (entry, Orientation::Transposed))
    }

    /// Desk cell count of a stored entry in either orientation, without
    /// materializing any cells.
    pub fn desk_count(&self, key: MemoKey) -> Option<usize> {
        self.lookup(key).map(|(entry, _)| entry.desk_count())
    }

    /// Look up the shape of `region` and place the cached cells into it.
    pub fn recall(&self, region: Region, length: DeskLength) -> Option<(Placement, Orientation)> {
        self.lookup(MemoKey::of(region, length))
            .map(|(entry, orientation)| (entry.anchored_at(region, orientation), orientation))
    }

    /// Store a relative placement under its direct key.
    ///
    /// Returns false, leaving the table unchanged, if the key already has an entry.
    pub fn store(&mut self, key: MemoKey, relative: Placement) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(relative);
                true
            }
        }
    }

    pub fn contains(&self, key: MemoKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Only used between independent batches.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
