// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for board geometry.
//!
//! The board is a square grid of `SIZE × SIZE` cells. Layouts smaller than
//! the grid are padded with off-board cells, so one `SIZE` covers the
//! English (7×7) and French (7×7) boards as well as larger variants.

/// Side length of the board grid.
pub const SIZE: usize = 9;

/// Total number of cells on the grid (SIZE²).
pub const NCELLS: usize = SIZE * SIZE;

/// Number of directions a peg can jump in.
pub const NDIRECTIONS: usize = 4;

/// Number of (position, move) pairs tried on every expansion, and so an
/// upper bound on the children of any one node.
pub const MAX_BRANCHING: usize = NCELLS * NDIRECTIONS;
