// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Position type for grid coordinates.

use crate::geometry::{constants::SIZE, Move};
use std::fmt;

/// A (row, col) coordinate on the board grid, both in 0..SIZE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `row >= SIZE` or `col >= SIZE`.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SIZE && col < SIZE,
            "Position out of range: ({}, {})",
            row,
            col
        );
        Self { row, col }
    }

    /// Try to create a new position, returning None if out of range.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Step `distance` cells in direction `mv`.
    ///
    /// Returns None if the result would leave the grid.
    pub fn offset(self, mv: Move, distance: usize) -> Option<Self> {
        let (dr, dc) = mv.delta();
        let row = self.row.checked_add_signed(dr * distance as isize)?;
        let col = self.col.checked_add_signed(dc * distance as isize)?;
        Self::try_new(row, col)
    }

    /// Iterate over every grid position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
