// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search session: the observable result of one search.
//!
//! The session replaces process-wide counters and solution buffers. The
//! engine resets it when a search starts and fills it in as the search runs.
//! Read it once [`SearchEngine::find_solution`](crate::SearchEngine::find_solution)
//! has returned.
//!
//! Each concurrent search needs its own session. Nothing in a session is
//! shared with any other search.

use crate::engine::recorder::Solution;
use crate::state::statistics::Statistics;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    /// Nodes popped from the frontier and expanded.
    pub expanded: u64,

    /// Children created by applying a legal move.
    pub generated: u64,

    /// Expansion cap this session ran under.
    pub budget: u64,

    /// Path to the best node found (empty if nothing beat the root).
    pub best_solution: Solution,

    /// Fewest pieces seen so far (starts at the root's count).
    pub best_piece_count: usize,

    /// Every best piece count in the order it was reached, root first.
    pub piece_count_history: Vec<usize>,

    pub statistics: Statistics,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything from a previous search.
    pub fn reset(&mut self, budget: u64, root_pieces: usize) {
        self.expanded = 0;
        self.generated = 0;
        self.budget = budget;
        self.best_solution = Solution::default();
        self.best_piece_count = root_pieces;
        self.piece_count_history.clear();
        self.piece_count_history.push(root_pieces);
        self.statistics.reset();
    }

    /// Whether the expansion budget is used up.
    pub fn budget_spent(&self) -> bool {
        self.expanded >= self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::statistics::Counters;

    #[test]
    fn test_reset_clears_previous_search() {
        let mut session = SearchSession::new();
        session.expanded = 10;
        session.generated = 20;
        session.piece_count_history = vec![5, 4];
        session.statistics.increment(Counters::Duplicates);

        session.reset(100, 7);

        assert_eq!(session.expanded, 0);
        assert_eq!(session.generated, 0);
        assert_eq!(session.budget, 100);
        assert_eq!(session.best_piece_count, 7);
        assert_eq!(session.piece_count_history, vec![7]);
        assert!(session.best_solution.is_empty());
        assert_eq!(session.statistics.get(Counters::Duplicates), 0);
    }

    #[test]
    fn test_budget_spent() {
        let mut session = SearchSession::new();
        session.reset(2, 3);
        assert!(!session.budget_spent());
        session.expanded = 2;
        assert!(session.budget_spent());

        session.reset(0, 3);
        assert!(session.budget_spent());
    }

    #[test]
    fn test_independent_sessions() {
        let mut a = SearchSession::new();
        let b = SearchSession::new();
        a.reset(5, 2);
        a.expanded = 3;
        assert_eq!(b.expanded, 0);
        assert_ne!(a, b);
    }
}
