// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text board layouts.
//!
//! A layout is up to `SIZE` lines of up to `SIZE` characters each:
//! `o` for a peg, `.` for an empty hole, `#` for a square off the board.
//! Layouts smaller than the grid are padded with `#`. Blank lines and
//! surrounding whitespace are ignored.

use crate::error::{SearchError, SearchResult};
use crate::geometry::{Cell, Position, SIZE};
use crate::state::{Grid, State};

/// Built-in starting boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// The 33-hole English cross with the centre hole empty.
    English,
    /// The 37-hole French board with one hole empty.
    FrenchCross,
    /// A four-peg cross that is solvable in three moves.
    SmallCross,
}

const ENGLISH: &str = "
##ooo##
##ooo##
ooooooo
ooo.ooo
ooooooo
##ooo##
##ooo##
";

// Vacated one square above the centre.
const FRENCH_CROSS: &str = "
##ooo##
#oo.oo#
ooooooo
ooooooo
ooooooo
#ooooo#
##ooo##
";

const SMALL_CROSS: &str = "
##o##
##.##
oo...
##o##
##.##
";

impl Layout {
    pub fn text(self) -> &'static str {
        match self {
            Layout::English => ENGLISH,
            Layout::FrenchCross => FRENCH_CROSS,
            Layout::SmallCross => SMALL_CROSS,
        }
    }

    pub fn state(self) -> SearchResult<State> {
        parse_layout(self.text())
    }
}

/// Parse layout text into a starting state.
///
/// The cursor starts at the origin with nothing selected.
pub fn parse_layout(text: &str) -> SearchResult<State> {
    let mut grid = Grid::off_board();
    let mut row = 0;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if row >= SIZE {
            return Err(SearchError::InvalidLayout {
                line: index + 1,
                reason: format!("more than {} rows", SIZE),
            });
        }
        let width = line.chars().count();
        if width > SIZE {
            return Err(SearchError::InvalidLayout {
                line: index + 1,
                reason: format!("{} columns, at most {} allowed", width, SIZE),
            });
        }
        for (col, c) in line.chars().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| SearchError::InvalidLayout {
                line: index + 1,
                reason: format!("unexpected character {:?}", c),
            })?;
            grid.set(Position::new(row, col), cell);
        }
        row += 1;
    }

    if row == 0 {
        return Err(SearchError::InvalidLayout {
            line: 0,
            reason: String::from("no rows"),
        });
    }
    Ok(State::new(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layouts_parse() {
        assert_eq!(Layout::English.state().unwrap().grid.count_pegs(), 32);
        assert_eq!(Layout::FrenchCross.state().unwrap().grid.count_pegs(), 36);
        assert_eq!(Layout::SmallCross.state().unwrap().grid.count_pegs(), 4);
    }

    #[test]
    fn test_padding_is_off_board() {
        let state = parse_layout("o.").unwrap();
        assert_eq!(state.cell(Position::new(0, 0)), Cell::Peg);
        assert_eq!(state.cell(Position::new(0, 1)), Cell::Empty);
        assert_eq!(state.cell(Position::new(0, 2)), Cell::Invalid);
        assert_eq!(state.cell(Position::new(1, 0)), Cell::Invalid);
        assert_eq!(state.cursor, Position::default());
        assert!(!state.selected);
    }

    #[test]
    fn test_round_trip_through_display() {
        let state = Layout::English.state().unwrap();
        let again = parse_layout(&state.to_string()).unwrap();
        assert_eq!(state.grid, again.grid);
    }

    #[test]
    fn test_rejects_bad_character() {
        let err = parse_layout("oo\nox").unwrap_err();
        match err {
            SearchError::InvalidLayout { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("'x'"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_rejects_oversized() {
        let wide = "o".repeat(SIZE + 1);
        assert!(matches!(
            parse_layout(&wide),
            Err(SearchError::InvalidLayout { line: 1, .. })
        ));

        let tall = "o\n".repeat(SIZE + 1);
        assert!(matches!(
            parse_layout(&tall),
            Err(SearchError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(parse_layout("\n  \n").is_err());
    }
}
