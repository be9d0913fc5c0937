// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid: the cell contents of the board, without cursor or selection.
//!
//! The grid is the transposition key. Two states with the same grid are the
//! same position regardless of where the cursor is.

use crate::geometry::{Cell, Position, SIZE};
use std::fmt;

/// A `SIZE × SIZE` array of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid([[Cell; SIZE]; SIZE]);

impl Grid {
    /// A grid with every square off the board.
    pub const fn off_board() -> Self {
        Self([[Cell::Invalid; SIZE]; SIZE])
    }

    pub fn get(&self, position: Position) -> Cell {
        self.0[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, cell: Cell) {
        self.0[position.row][position.col] = cell;
    }

    /// Number of squares holding a peg.
    pub fn count_pegs(&self) -> usize {
        self.cells().filter(|c| c.is_peg()).count()
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    /// 64-bit FNV-1a hash of the cell bytes.
    ///
    /// Unseeded: the same grid hashes the same way in every run.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        self.cells().fold(OFFSET, |hash, cell| {
            (hash ^ cell.as_u8() as u64).wrapping_mul(PRIME)
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::off_board()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_and_count() {
        let mut grid = Grid::off_board();
        assert_eq!(grid.count_pegs(), 0);

        grid.set(Position::new(1, 2), Cell::Peg);
        grid.set(Position::new(1, 3), Cell::Empty);
        assert_eq!(grid.get(Position::new(1, 2)), Cell::Peg);
        assert_eq!(grid.get(Position::new(1, 3)), Cell::Empty);
        assert_eq!(grid.count_pegs(), 1);
    }

    #[test]
    fn test_fingerprint_distinguishes_grids() {
        let a = Grid::off_board();
        let mut b = a;
        b.set(Position::new(0, 0), Cell::Peg);
        assert_eq!(a.fingerprint(), Grid::off_board().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_display_shape() {
        let text = Grid::off_board().to_string();
        assert_eq!(text.lines().count(), SIZE);
        assert!(text.lines().all(|l| l.len() == SIZE && l.chars().all(|c| c == '#')));
    }
}
