// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell type for board squares.
//!
//! Each square of the grid is either off the board, an empty hole, or a hole
//! holding a peg. The textual form used by layouts and printing is
//! `#` (off-board), `.` (empty) and `o` (peg).

use std::fmt;

/// The content of one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    /// Not part of the playing area.
    #[default]
    Invalid = 0,
    /// A hole with no peg in it.
    Empty = 1,
    /// A hole holding a peg.
    Peg = 2,
}

impl Cell {
    /// Convert a layout character into a cell.
    ///
    /// Returns None for characters outside the layout alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Invalid),
            '.' => Some(Cell::Empty),
            'o' | 'O' => Some(Cell::Peg),
            _ => None,
        }
    }

    /// The layout character for this cell.
    pub fn to_char(self) -> char {
        match self {
            Cell::Invalid => '#',
            Cell::Empty => '.',
            Cell::Peg => 'o',
        }
    }

    /// True for squares that are part of the playing area.
    pub fn is_on_board(self) -> bool {
        self != Cell::Invalid
    }

    pub fn is_peg(self) -> bool {
        self == Cell::Peg
    }

    /// Raw byte value, used for hashing grids.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
