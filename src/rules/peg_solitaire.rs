// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orthogonal peg solitaire.
//!
//! A peg jumps over an orthogonally adjacent peg into the empty hole directly
//! beyond it, and the jumped peg is removed. The game is won when a single
//! peg remains.

use crate::geometry::{Cell, Move, Position};
use crate::rules::Rules;
use crate::state::State;

#[derive(Debug, Clone, Copy, Default)]
pub struct PegSolitaire;

impl PegSolitaire {
    /// The jumped-over square and the landing square for a move, if both are
    /// on the grid.
    fn jump_squares(position: Position, mv: Move) -> Option<(Position, Position)> {
        Some((position.offset(mv, 1)?, position.offset(mv, 2)?))
    }
}

impl Rules for PegSolitaire {
    fn can_apply(&self, state: &State, position: Position, mv: Move) -> bool {
        if !state.cell(position).is_peg() {
            return false;
        }
        match Self::jump_squares(position, mv) {
            Some((over, landing)) => {
                state.cell(over).is_peg() && state.cell(landing) == Cell::Empty
            }
            None => false,
        }
    }

    /// The cursor is left on the square the peg jumped from, so a recorded
    /// state identifies the peg that produced it.
    fn execute_move(&self, state: &mut State, cursor: Position, mv: Move) {
        let Some((over, landing)) = Self::jump_squares(cursor, mv) else {
            return;
        };
        state.set_cell(cursor, Cell::Empty);
        state.set_cell(over, Cell::Empty);
        state.set_cell(landing, Cell::Peg);
        state.cursor = cursor;
        state.selected = false;
    }

    fn num_pegs(&self, state: &State) -> usize {
        state.grid.count_pegs()
    }

    fn won(&self, state: &State) -> bool {
        self.num_pegs(state) == 1
    }

    fn name(&self) -> &str {
        "peg solitaire"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::layout::parse_layout;

    #[test]
    fn test_can_apply_requires_peg_peg_hole() {
        let rules = PegSolitaire;
        let state = parse_layout("oo.o\n.o..").unwrap();

        assert!(rules.can_apply(&state, Position::new(0, 0), Move::Right));
        // Jumped square empty.
        assert!(!rules.can_apply(&state, Position::new(0, 3), Move::Left));
        // Source empty.
        assert!(!rules.can_apply(&state, Position::new(0, 2), Move::Left));
        // Landing off the grid.
        assert!(!rules.can_apply(&state, Position::new(0, 1), Move::Left));
        // Landing off the board (padding cell).
        assert!(!rules.can_apply(&state, Position::new(0, 1), Move::Down));
    }

    #[test]
    fn test_execute_move_hops_and_captures() {
        let rules = PegSolitaire;
        let mut state = parse_layout("oo.").unwrap();
        state.selected = true;

        rules.execute_move(&mut state, Position::new(0, 0), Move::Right);

        assert_eq!(state.cell(Position::new(0, 0)), Cell::Empty);
        assert_eq!(state.cell(Position::new(0, 1)), Cell::Empty);
        assert_eq!(state.cell(Position::new(0, 2)), Cell::Peg);
        assert_eq!(state.cursor, Position::new(0, 0));
        assert!(!state.selected);
        assert_eq!(rules.num_pegs(&state), 1);
        assert!(rules.won(&state));
    }

    #[test]
    fn test_vertical_moves() {
        let rules = PegSolitaire;
        let mut state = parse_layout(".\no\no").unwrap();
        let from = Position::new(2, 0);

        assert!(rules.can_apply(&state, from, Move::Up));
        assert!(!rules.can_apply(&state, from, Move::Down));
        rules.execute_move(&mut state, from, Move::Up);
        assert_eq!(state.cell(Position::new(0, 0)), Cell::Peg);
        assert_eq!(rules.num_pegs(&state), 1);
    }

    #[test]
    fn test_won_only_with_single_peg() {
        let rules = PegSolitaire;
        assert!(!rules.won(&parse_layout("...").unwrap()));
        assert!(rules.won(&parse_layout(".o.").unwrap()));
        assert!(!rules.won(&parse_layout("o.o").unwrap()));
    }
}
