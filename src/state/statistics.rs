// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the solver
//! as it takes shortcuts, hits the memo table or scores candidates.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    MemoHits,
    TransposedMemoHits,
    MemoStores,
    StripShortcuts,
    GreedySplits,
    SpiralBorderSplits,
    ExhaustiveSearches,
    CandidatesScored,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_increment_and_reset() {
        let mut stats = Statistics::new();
        stats.increment(Counters::MemoHits);
        stats.increment(Counters::MemoHits);
        stats.increment(Counters::CandidatesScored);
        assert_eq!(stats.get(Counters::MemoHits), 2);
        assert_eq!(stats.get(Counters::CandidatesScored), 1);
        assert_eq!(stats.get(Counters::MemoStores), 0);

        stats.reset();
        assert_eq!(stats.get(Counters::MemoHits), 0);
    }

    #[test]
    fn test_display_names() {
        let mut stats = Statistics::new();
        stats.increment(Counters::SpiralBorderSplits);
        let text = stats.to_string();
        assert!(text.starts_with("memo_hits=0 "));
        assert!(text.contains("spiral_border_splits=1"));
    }
}
