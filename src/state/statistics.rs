// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Per-search counters beyond the headline expanded/generated counts. They
//! are stored in the session and incremented by the engine as it runs.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Nodes allocated (root included).
    NodesCreated,
    /// Nodes returned to the arena.
    NodesReleased,
    /// Generated children discarded because their grid was already visited.
    Duplicates,
    /// Nodes released by backtracking cleanup.
    Pruned,
    /// Nodes only reclaimed by the final sweep.
    NodesStranded,
    /// Times a new best piece count was recorded.
    Improvements,
    /// Times the visited table grew.
    TableGrowths,
    /// Largest number of nodes on the frontier at once.
    FrontierHighWater,
}

impl Counters {
    pub fn name(self) -> &'static str {
        match self {
            Counters::NodesCreated => "nodes created",
            Counters::NodesReleased => "nodes released",
            Counters::Duplicates => "duplicates",
            Counters::Pruned => "pruned",
            Counters::NodesStranded => "stranded",
            Counters::Improvements => "improvements",
            Counters::TableGrowths => "table growths",
            Counters::FrontierHighWater => "frontier high water",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Overwrite the specified counter (for high-water marks).
    pub fn set(&mut self, counter: Counters, value: u64) {
        self.stats[counter as usize] = value;
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
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}: {}", counter.name(), self.get(counter))?;
        }
        Ok(())
    }
}
