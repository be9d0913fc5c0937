// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frontier stack for iterative depth-first traversal.
//!
//! Every node on the stack is held by it: popping hands that hold to the
//! caller. The stack grows on demand and reports allocation failure instead
//! of overflowing.

use crate::engine::node::NodeId;
use crate::error::{SearchError, SearchResult};

#[derive(Debug)]
pub struct FrontierStack {
    entries: Vec<NodeId>,
    high_water: usize,
}

impl FrontierStack {
    /// Initial reservation; deep boards rarely need more.
    const INITIAL_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::INITIAL_CAPACITY),
            high_water: 0,
        }
    }

    pub fn push(&mut self, node: NodeId) -> SearchResult<()> {
        self.entries
            .try_reserve(1)
            .map_err(SearchError::out_of_memory("frontier stack"))?;
        self.entries.push(node);
        self.high_water = self.high_water.max(self.entries.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop()
    }

    /// The node the next `pop` would return.
    pub fn peek_top(&self) -> Option<NodeId> {
        self.entries.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Largest number of entries held at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl Default for FrontierStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::node::NodeArena;
    use crate::state::State;

    fn ids(n: usize) -> (NodeArena, Vec<NodeId>) {
        let mut arena = NodeArena::new();
        let ids = (0..n)
            .map(|_| arena.create_root(&State::default()).unwrap())
            .collect();
        (arena, ids)
    }

    #[test]
    fn test_new_is_empty() {
        let stack = FrontierStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek_top(), None);
    }

    #[test]
    fn test_lifo_order() {
        let (_arena, ids) = ids(3);
        let mut stack = FrontierStack::new();
        for &id in &ids {
            stack.push(id).unwrap();
        }
        assert_eq!(stack.peek_top(), Some(ids[2]));
        assert_eq!(stack.pop(), Some(ids[2]));
        assert_eq!(stack.peek_top(), Some(ids[1]));
        assert_eq!(stack.pop(), Some(ids[1]));
        assert_eq!(stack.pop(), Some(ids[0]));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let (_arena, ids) = ids(1);
        let mut stack = FrontierStack::new();
        for _ in 0..FrontierStack::INITIAL_CAPACITY * 3 {
            stack.push(ids[0]).unwrap();
        }
        assert_eq!(stack.len(), FrontierStack::INITIAL_CAPACITY * 3);
        assert_eq!(stack.high_water(), FrontierStack::INITIAL_CAPACITY * 3);
    }

    #[test]
    fn test_high_water_survives_emptying() {
        let (_arena, ids) = ids(3);
        let mut stack = FrontierStack::new();
        for &id in &ids {
            stack.push(id).unwrap();
        }
        stack.pop();
        stack.push(ids[0]).unwrap();
        while stack.pop().is_some() {}
        assert!(stack.is_empty());
        assert_eq!(stack.high_water(), 3);
    }
}
