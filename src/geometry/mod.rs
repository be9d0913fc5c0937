// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the peg solitaire board.
//!
//! This module contains type-safe representations of board primitives:
//! - Cell: the content of one grid square (empty, peg, off-board)
//! - Position: a (row, col) coordinate on the grid
//! - Move: one of the four jump directions

pub mod cell;
pub mod constants;
pub mod direction;
pub mod position;

// Re-export for convenience
pub use cell::Cell;
pub use constants::*;
pub use direction::Move;
pub use position::Position;
