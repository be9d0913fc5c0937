// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solution recording.
//!
//! A [`Solution`] is the path from the root to some node, stored as
//! independent copies of every state on the way. Nothing in it refers back
//! into the node arena, so the nodes can be released right after recording.

use crate::engine::node::{NodeArena, NodeId};
use crate::error::{SearchError, SearchResult};
use crate::geometry::{Move, Position};
use crate::rules::Rules;
use crate::state::State;
use std::fmt;

/// A root-to-node path.
///
/// `states[0]` is the root and `states[i + 1]` is the result of playing
/// `moves[i]` in `states[i]`, so `states.len() == moves.len() + 1` for any
/// recorded path. The default value is the empty solution (nothing recorded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    states: Vec<State>,
    moves: Vec<Move>,
}

impl Solution {
    /// Number of moves on the path.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The last state on the path.
    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// Each move together with the square it was played from.
    ///
    /// The square is the cursor recorded on the state the move produced.
    pub fn steps(&self) -> impl Iterator<Item = (Position, Move)> + '_ {
        self.moves
            .iter()
            .zip(self.states.iter().skip(1))
            .map(|(&mv, after)| (after.cursor, mv))
    }

    /// Replay the path under `rules`, checking every step.
    ///
    /// Returns the index of the first move that is illegal or does not
    /// reproduce the recorded next state.
    pub fn replay<R: Rules>(&self, rules: &R) -> Result<(), usize> {
        for (i, (position, mv)) in self.steps().enumerate() {
            let mut state = self.states[i];
            if !rules.can_apply(&state, position, mv) {
                return Err(i);
            }
            state.cursor = position;
            state.selected = true;
            rules.execute_move(&mut state, position, mv);
            if state != self.states[i + 1] {
                return Err(i);
            }
        }
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.states.clear();
        self.moves.clear();
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (position, mv)) in self.steps().enumerate() {
            writeln!(f, "{:>3}. {} {}", i + 1, position, mv)?;
        }
        Ok(())
    }
}

/// Record the path from the root to `node` into `solution`, replacing
/// whatever it held.
///
/// Walks parent links from `node` up to the root, so the result has
/// `depth(node)` moves and `depth(node) + 1` states.
pub fn record(arena: &NodeArena, node: NodeId, solution: &mut Solution) -> SearchResult<()> {
    let depth = arena.get(node)?.depth;
    solution.clear();
    solution
        .states
        .try_reserve(depth + 1)
        .map_err(SearchError::out_of_memory("solution states"))?;
    solution
        .moves
        .try_reserve(depth)
        .map_err(SearchError::out_of_memory("solution moves"))?;

    let mut current = Some(node);
    while let Some(id) = current {
        let n = arena.get(id)?;
        solution.states.push(n.state);
        if let Some(mv) = n.mv {
            solution.moves.push(mv);
        }
        current = n.parent;
    }
    solution.states.reverse();
    solution.moves.reverse();
    debug_assert_eq!(solution.moves.len(), depth);
    Ok(())
}
