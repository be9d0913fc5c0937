// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move type: the four jump directions.
//!
//! The declaration order of the variants is the order in which the search
//! tries moves from every cell. Search results depend on it.

use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the four directions a peg can jump in.
///
/// `Left` and `Right` change the column, `Up` and `Down` change the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
#[repr(u8)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    /// All moves in enumeration order.
    pub fn all() -> impl Iterator<Item = Move> {
        Move::iter()
    }

    /// Unit step (row delta, column delta) for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::Up => "up",
            Move::Down => "down",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
