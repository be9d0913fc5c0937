// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board rules consumed by the search engine.
//!
//! The engine never inspects the board directly. Everything it needs to know
//! about geometry and legality comes through the [`Rules`] trait, so a
//! different board variant only needs a different implementation.
//!
//! # Example
//!
//! ```
//! use peg_search::geometry::{Move, Position};
//! use peg_search::rules::{layout, PegSolitaire, Rules};
//!
//! let rules = PegSolitaire;
//! let mut state = layout::parse_layout("oo.").unwrap();
//! let from = Position::new(0, 0);
//!
//! assert!(rules.can_apply(&state, from, Move::Right));
//! rules.execute_move(&mut state, from, Move::Right);
//! assert_eq!(rules.num_pegs(&state), 1);
//! assert!(rules.won(&state));
//! ```

pub mod layout;
pub mod peg_solitaire;

pub use layout::Layout;
pub use peg_solitaire::PegSolitaire;

use crate::geometry::{Move, Position};
use crate::state::State;
use std::fmt::Debug;

/// Legality and effect of moves on a board.
///
/// # Contract
///
/// - `execute_move` is only called after `can_apply` returned true for the
///   same state, position and move.
/// - `num_pegs` should strictly decrease with every executed move. Backtracking
///   cleanup relies on piece counts to find the end of a dead branch. Rules
///   that break this still search correctly, but some dead nodes are then
///   only reclaimed when the search ends.
pub trait Rules: Debug {
    /// Whether `mv` can be played from `position` in `state`.
    fn can_apply(&self, state: &State, position: Position, mv: Move) -> bool;

    /// Play `mv` from `cursor`, mutating `state` in place.
    fn execute_move(&self, state: &mut State, cursor: Position, mv: Move);

    /// Number of pieces remaining on the board.
    fn num_pegs(&self, state: &State) -> usize;

    /// Whether `state` is a winning configuration.
    fn won(&self, state: &State) -> bool;

    /// Optional: a name for these rules (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rules + ?Sized> Rules for &R {
    fn can_apply(&self, state: &State, position: Position, mv: Move) -> bool {
        (**self).can_apply(state, position, mv)
    }

    fn execute_move(&self, state: &mut State, cursor: Position, mv: Move) {
        (**self).execute_move(state, cursor, mv)
    }

    fn num_pegs(&self, state: &State) -> usize {
        (**self).num_pegs(state)
    }

    fn won(&self, state: &State) -> bool {
        (**self).won(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
