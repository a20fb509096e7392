// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-batch bookkeeping that is not part of the memo table.

pub mod statistics;

pub use statistics::{Counters, Statistics};
