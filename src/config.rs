// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! # Example
//!
//! ```
//! use peg_search::config::{CapacityPolicy, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_budget(50_000)
//!     .with_visited_capacity(1 << 12)
//!     .with_capacity_policy(CapacityPolicy::Fixed);
//! assert_eq!(config.budget, 50_000);
//! ```

/// What the visited table does when an insertion would push it past its
/// maximum load factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Double the table and rehash every entry.
    #[default]
    Grow,
    /// Refuse the insertion with
    /// [`SearchError::VisitedTableFull`](crate::SearchError::VisitedTableFull).
    Fixed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of node expansions before the search gives up.
    pub budget: u64,

    /// Initial number of visited-table slots (rounded up to a power of two).
    pub visited_capacity: usize,

    /// Fraction of slots that may be occupied before the capacity policy applies.
    pub max_load_factor: f64,

    pub capacity_policy: CapacityPolicy,
}

impl SearchConfig {
    pub const DEFAULT_BUDGET: u64 = 1_000_000;
    pub const DEFAULT_VISITED_CAPACITY: usize = 1 << 16;
    pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_visited_capacity(mut self, capacity: usize) -> Self {
        self.visited_capacity = capacity;
        self
    }

    /// Set the maximum load factor, clamped to (0, 0.95].
    ///
    /// Linear probing needs at least one free slot to terminate a miss.
    pub fn with_max_load_factor(mut self, load: f64) -> Self {
        self.max_load_factor = load.clamp(0.05, 0.95);
        self
    }

    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: Self::DEFAULT_BUDGET,
            visited_capacity: Self::DEFAULT_VISITED_CAPACITY,
            max_load_factor: Self::DEFAULT_MAX_LOAD_FACTOR,
            capacity_policy: CapacityPolicy::Grow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.budget, 1_000_000);
        assert_eq!(config.visited_capacity, 65_536);
        assert_eq!(config.capacity_policy, CapacityPolicy::Grow);
    }

    #[test]
    fn test_load_factor_clamped() {
        assert_eq!(SearchConfig::default().with_max_load_factor(2.0).max_load_factor, 0.95);
        assert_eq!(SearchConfig::default().with_max_load_factor(0.0).max_load_factor, 0.05);
        assert_eq!(SearchConfig::default().with_max_load_factor(0.5).max_load_factor, 0.5);
    }
}
