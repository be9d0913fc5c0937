// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Budget-bounded depth-first search engine.
//!
//! The engine drives an explicit frontier stack over a tree of nodes,
//! eliminating transpositions through a visited table and recording the best
//! path found so far.
//!
//! # Algorithm
//!
//! 1. Push the root. Its piece count is the best so far. Only generated
//!    children go into the visited table, so a line of play that returns to
//!    the starting grid expands it again.
//! 2. If the previous node turned out to be a dead end, prune its branch back
//!    towards the new top of the stack.
//! 3. Pop a node. If it has fewer pieces than the best so far, record it.
//! 4. Try every move from every square, in row-major order and
//!    left/right/up/down order:
//!    - a winning child is recorded and ends the search,
//!    - a child with an unseen grid is pushed and marked visited,
//!    - a duplicate child is released straight away.
//! 5. Stop once the number of expansions reaches the budget.
//!
//! The search ends in one of three ways, reported as [`Termination`]. In all
//! three cases every node created during the search has been released when
//! `find_solution` returns.
//!
//! # Example
//!
//! ```
//! use peg_search::config::SearchConfig;
//! use peg_search::context::SearchSession;
//! use peg_search::engine::{SearchEngine, Termination};
//! use peg_search::rules::{Layout, PegSolitaire};
//!
//! let engine = SearchEngine::new(PegSolitaire, SearchConfig::default().with_budget(10_000));
//! let mut session = SearchSession::new();
//! let start = Layout::SmallCross.state().unwrap();
//!
//! let termination = engine.find_solution(&mut session, &start).unwrap();
//! assert_eq!(termination, Termination::Won);
//! assert_eq!(session.best_solution.len(), 3);
//! ```

pub mod frontier;
pub mod node;
pub mod recorder;
pub mod visited;

pub use frontier::FrontierStack;
pub use node::{Node, NodeArena, NodeId};
pub use recorder::{record, Solution};
pub use visited::VisitedTable;

use crate::config::SearchConfig;
use crate::context::SearchSession;
use crate::error::SearchResult;
use crate::geometry::{Move, Position};
use crate::rules::Rules;
use crate::state::statistics::Counters;
use crate::state::State;
use std::fmt;
use tracing::{debug, info, trace, warn};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A winning state was reached. The session holds the path to it.
    Won,
    /// The expansion budget ran out. The session holds the best path so far.
    BudgetExceeded,
    /// Every reachable state was expanded without a win.
    Exhausted,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::Won => "won",
            Termination::BudgetExceeded => "budget exceeded",
            Termination::Exhausted => "exhausted",
        })
    }
}

/// Search engine over a set of board rules.
///
/// The engine holds no per-search state: every call to
/// [`find_solution`](Self::find_solution) builds its own arena, frontier and
/// visited table, so one engine can run any number of independent searches.
#[derive(Debug, Clone)]
pub struct SearchEngine<R: Rules> {
    rules: R,
    config: SearchConfig,
}

/// Structures that live for exactly one search.
struct Workspace {
    arena: NodeArena,
    stack: FrontierStack,
    visited: VisitedTable,
}

impl<R: Rules> SearchEngine<R> {
    pub fn new(rules: R, config: SearchConfig) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `initial`, filling in `session`.
    ///
    /// `session` is reset first. On return it holds the counters, the best
    /// path found (possibly empty) and the piece-count history.
    ///
    /// Errors are reserved for allocation failure, a full fixed-capacity
    /// visited table, and broken node-lifetime invariants. Running out of
    /// budget or of states to explore is reported through [`Termination`].
    pub fn find_solution(
        &self,
        session: &mut SearchSession,
        initial: &State,
    ) -> SearchResult<Termination> {
        let mut ws = Workspace {
            arena: NodeArena::new(),
            stack: FrontierStack::new(),
            visited: VisitedTable::from_config(&self.config)?,
        };

        let result = self.run(session, initial, &mut ws);

        let stranded = ws.arena.release_all();
        if stranded > 0 {
            warn!(stranded, "nodes left behind by pruning, reclaimed by final sweep");
        }
        let stats = &mut session.statistics;
        stats.add(Counters::NodesStranded, stranded as u64);
        stats.set(Counters::NodesCreated, ws.arena.created());
        stats.set(Counters::NodesReleased, ws.arena.released());
        stats.set(Counters::TableGrowths, ws.visited.growths());
        stats.set(Counters::FrontierHighWater, ws.stack.high_water() as u64);

        match &result {
            Ok(termination) => info!(
                %termination,
                expanded = session.expanded,
                generated = session.generated,
                pieces = session.best_piece_count,
                moves = session.best_solution.len(),
                "search finished"
            ),
            Err(error) => warn!(%error, expanded = session.expanded, "search failed"),
        }
        result
    }

    fn run(
        &self,
        session: &mut SearchSession,
        initial: &State,
        ws: &mut Workspace,
    ) -> SearchResult<Termination> {
        let rules = &self.rules;
        let root_pieces = rules.num_pegs(initial);
        session.reset(self.config.budget, root_pieces);
        info!(
            rules = rules.name(),
            budget = self.config.budget,
            pieces = root_pieces,
            "search started"
        );

        let root = ws.arena.create_root(initial)?;
        ws.stack.push(root)?;

        if session.budget_spent() {
            Self::release_outstanding(ws, &[])?;
            return Ok(Termination::BudgetExceeded);
        }

        let mut remaining = root_pieces;
        // The last node popped, if it left no children on the stack.
        let mut dead_end: Option<NodeId> = None;

        while let Some(top) = ws.stack.peek_top() {
            if let Some(dead) = dead_end.take() {
                let pruned = ws.arena.prune_to(dead, top, rules)?;
                session.statistics.add(Counters::Pruned, pruned as u64);
                trace!(node = %dead, boundary = %top, pruned, "pruned dead branch");
            }
            let mut leaf = true;

            let Some(n) = ws.stack.pop() else { break };
            session.expanded += 1;

            let state = *ws.arena.state(n)?;
            let pieces = rules.num_pegs(&state);
            if pieces < remaining {
                remaining = pieces;
                Self::improve(session, &ws.arena, n, pieces)?;
            }

            for position in Position::all() {
                for mv in Move::all() {
                    if !rules.can_apply(&state, position, mv) {
                        continue;
                    }
                    let child = ws.arena.expand(n, position, mv, rules)?;
                    session.generated += 1;

                    let child_state = *ws.arena.state(child)?;
                    let grid = child_state.grid;
                    if rules.won(&child_state) {
                        Self::improve(session, &ws.arena, child, rules.num_pegs(&child_state))?;
                        Self::release_outstanding(ws, &[child, n])?;
                        return Ok(Termination::Won);
                    }
                    if !ws.visited.contains(&grid) {
                        leaf = false;
                        ws.stack.push(child)?;
                        ws.visited.insert(grid)?;
                    } else {
                        ws.arena.free_chain(child)?;
                        session.statistics.increment(Counters::Duplicates);
                    }
                }
            }

            if session.budget_spent() {
                Self::release_outstanding(ws, &[n])?;
                return Ok(Termination::BudgetExceeded);
            }

            if leaf {
                dead_end = Some(n);
            } else {
                // Its children keep it alive from here on.
                ws.arena.drop_hold(n)?;
            }
        }

        if let Some(dead) = dead_end {
            ws.arena.free_chain(dead)?;
        }
        ws.visited.clear();
        Ok(Termination::Exhausted)
    }

    /// Record `node` as the new best and log the improvement.
    fn improve(
        session: &mut SearchSession,
        arena: &NodeArena,
        node: NodeId,
        pieces: usize,
    ) -> SearchResult<()> {
        record(arena, node, &mut session.best_solution)?;
        session.best_piece_count = pieces;
        session.piece_count_history.push(pieces);
        session.statistics.increment(Counters::Improvements);
        debug!(
            pieces,
            depth = session.best_solution.len(),
            expanded = session.expanded,
            "new best"
        );
        Ok(())
    }

    /// Release everything still on the stack, then each of `chain` (held
    /// by the driver) with whatever ancestors that frees, and drop the
    /// visited table.
    fn release_outstanding(ws: &mut Workspace, chain: &[NodeId]) -> SearchResult<()> {
        while let Some(node) = ws.stack.pop() {
            ws.arena.free_chain(node)?;
        }
        for &node in chain {
            ws.arena.free_chain(node)?;
        }
        ws.visited.clear();
        Ok(())
    }
}
