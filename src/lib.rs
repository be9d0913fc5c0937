// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Budget-bounded depth-first search for peg solitaire.
//!
//! The search looks for a sequence of jumps that leaves as few pegs as
//! possible, ideally a single one. It stops at the first win it finds, or
//! reports the best position reached before its expansion budget ran out.
//!
//! # Architecture
//!
//! ## Collaborators
//!
//! The board geometry and the rules of play sit behind the
//! [`rules::Rules`] trait. [`rules::PegSolitaire`] is the standard
//! orthogonal game, and [`rules::layout`] reads boards from text.
//!
//! ## Core
//!
//! - [`engine::node`]: arena of search-tree nodes with parent back-links and
//!   reference counts, plus the cleanup walks that reclaim dead branches
//! - [`engine::frontier`]: explicit LIFO stack driving the traversal
//! - [`engine::visited`]: transposition table of board grids
//! - [`engine::recorder`]: copies a root-to-node path out of the tree
//! - [`engine::SearchEngine`]: the driver loop
//!
//! ## Results
//!
//! A [`SearchSession`] collects the counters, the best path and the
//! piece-count history of one search. [`Termination`] says how it ended.
//!
//! # Example
//!
//! ```
//! use peg_search::rules::layout::parse_layout;
//! use peg_search::Termination;
//!
//! let start = parse_layout("oo.o").unwrap();
//! let (termination, session) = peg_search::find_solution(&start, 1_000).unwrap();
//!
//! assert_eq!(termination, Termination::Won);
//! assert_eq!(session.best_solution.len(), 2);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use config::{CapacityPolicy, SearchConfig};
pub use context::SearchSession;
pub use engine::{SearchEngine, Solution, Termination};
pub use error::{SearchError, SearchResult};
pub use rules::{PegSolitaire, Rules};
pub use state::State;

/// Search `initial` under standard peg solitaire rules with the given budget
/// and default settings otherwise.
pub fn find_solution(initial: &State, budget: u64) -> SearchResult<(Termination, SearchSession)> {
    let engine = SearchEngine::new(PegSolitaire, SearchConfig::default().with_budget(budget));
    let mut session = SearchSession::new();
    let termination = engine.find_solution(&mut session, initial)?;
    Ok((termination, session))
}
