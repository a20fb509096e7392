// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry between a region and its transposed counterpart.
//!
//! A region of `h` rows and `w` columns admits exactly the placements of a
//! `w`x`h` region with row and column swapped. The memo table uses this to
//! answer a lookup for one shape from an entry stored for the other.
//!
//! ## Module Structure
//!
//! - `transpose`: the `Orientation` of a reused entry and the key transposition
//! - `mod`: Public API and re-exports

pub mod transpose;

// Re-export main types
pub use transpose::{transposed_key, Orientation};
