// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Size-keyed memoization of solved regions.
//!
//! The solve of a region depends only on its height, width and desk length,
//! never on where it sits in the room. Every solved shape is therefore stored
//! once, relative to its own origin, and reused by translation for any later
//! region of the same shape (or, transposed, of the swapped shape).
//!
//! Entries are write-once and never evicted: the table lives for the whole
//! batch, across rooms and across files.

pub mod table;

pub use table::{MemoKey, MemoTable};
