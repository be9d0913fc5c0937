// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board state: a grid snapshot plus cursor and selection.
//!
//! States are plain values. Every search node owns its own copy, so nodes can
//! be released without affecting any recorded solution.

pub mod grid;
pub mod statistics;

pub use grid::Grid;

use crate::geometry::{Cell, Position};
use std::fmt;

/// One board configuration.
///
/// `cursor` is the square most recently acted upon and `selected` marks a
/// peg chosen for a pending move. Neither takes part in transposition checks;
/// use [`State::grid`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct State {
    pub grid: Grid,
    pub cursor: Position,
    pub selected: bool,
}

impl State {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cursor: Position::default(),
            selected: false,
        }
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.grid.get(position)
    }

    pub fn set_cell(&mut self, position: Position, cell: Cell) {
        self.grid.set(position, cell);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
