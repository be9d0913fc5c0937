// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use peg_search::geometry::{Cell, Move, Position};
use peg_search::state::statistics::Counters;
use peg_search::{
    PegSolitaire, Rules, SearchConfig, SearchEngine, SearchSession, State, Termination,
};
use std::cell::Cell as Counter;

/// Run a peg solitaire search with `budget` and default settings.
pub fn run(start: &State, budget: u64) -> (Termination, SearchSession) {
    let engine = SearchEngine::new(PegSolitaire, SearchConfig::default().with_budget(budget));
    let mut session = SearchSession::new();
    let termination = engine
        .find_solution(&mut session, start)
        .expect("search failed");
    (termination, session)
}

/// Every node created was released exactly once.
pub fn assert_balanced(session: &SearchSession) {
    let stats = &session.statistics;
    assert_eq!(
        stats.get(Counters::NodesCreated),
        stats.get(Counters::NodesReleased),
        "node leak: {}",
        stats
    );
    // Root plus one node per generated child.
    assert_eq!(stats.get(Counters::NodesCreated), session.generated + 1);
}

/// The best piece count only ever went down, and ends where the session says.
pub fn assert_history_decreasing(session: &SearchSession) {
    let history = &session.piece_count_history;
    assert!(history.windows(2).all(|w| w[1] < w[0]), "history {:?}", history);
    assert_eq!(history.last().copied(), Some(session.best_piece_count));
}

/// Peg solitaire rules that count how often the engine consults them.
#[derive(Debug, Default)]
pub struct CountingRules {
    pub can_apply: Counter<u64>,
    pub execute_move: Counter<u64>,
    pub num_pegs: Counter<u64>,
    pub won: Counter<u64>,
}

impl Rules for CountingRules {
    fn can_apply(&self, state: &State, position: Position, mv: Move) -> bool {
        self.can_apply.set(self.can_apply.get() + 1);
        PegSolitaire.can_apply(state, position, mv)
    }

    fn execute_move(&self, state: &mut State, cursor: Position, mv: Move) {
        self.execute_move.set(self.execute_move.get() + 1);
        PegSolitaire.execute_move(state, cursor, mv)
    }

    fn num_pegs(&self, state: &State) -> usize {
        self.num_pegs.set(self.num_pegs.get() + 1);
        PegSolitaire.num_pegs(state)
    }

    fn won(&self, state: &State) -> bool {
        self.won.set(self.won.get() + 1);
        PegSolitaire.won(state)
    }
}

/// Peg solitaire plus sliding a peg into an adjacent hole.
///
/// Slides keep the piece count unchanged, so piece counts tie across
/// depths. Slides are tried in the same direction slots as jumps: a jump
/// takes priority when both are possible.
#[derive(Debug, Default)]
pub struct SlidingRules;

impl SlidingRules {
    fn can_slide(state: &State, position: Position, mv: Move) -> bool {
        state.cell(position).is_peg()
            && position
                .offset(mv, 1)
                .is_some_and(|to| state.cell(to) == Cell::Empty)
    }
}

impl Rules for SlidingRules {
    fn can_apply(&self, state: &State, position: Position, mv: Move) -> bool {
        PegSolitaire.can_apply(state, position, mv) || Self::can_slide(state, position, mv)
    }

    fn execute_move(&self, state: &mut State, cursor: Position, mv: Move) {
        if PegSolitaire.can_apply(state, cursor, mv) {
            PegSolitaire.execute_move(state, cursor, mv);
        } else if let Some(to) = cursor.offset(mv, 1) {
            state.set_cell(cursor, Cell::Empty);
            state.set_cell(to, Cell::Peg);
            state.selected = false;
        }
    }

    fn num_pegs(&self, state: &State) -> usize {
        PegSolitaire.num_pegs(state)
    }

    fn won(&self, state: &State) -> bool {
        PegSolitaire.won(state)
    }
}
