// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the search.
//!
//! Running out of budget and exhausting the search space are normal ways for
//! a search to end and are reported through
//! [`Termination`](crate::engine::Termination), not here. These errors cover
//! allocation failure, the fixed-capacity visited table, broken node-lifetime
//! invariants and bad board input.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// An allocation for the named structure could not be satisfied.
    #[error("out of memory growing {what}")]
    OutOfMemory { what: &'static str },

    /// The visited table is configured with a fixed capacity and is full.
    #[error("visited table full: capacity {capacity} reached under the fixed capacity policy")]
    VisitedTableFull { capacity: usize },

    /// A node handle refers to a slot that has already been released.
    #[error("node {id} was already released")]
    NodeReleased { id: usize },

    /// A node was released while children or a holder still reference it.
    #[error("node {id} released with {refs} live references")]
    NodeStillReferenced { id: usize, refs: u32 },

    /// A holder let go of a node it did not hold.
    #[error("node {id} has no holder to drop")]
    NotHeld { id: usize },

    /// A node handle that was never allocated by this arena.
    #[error("node {id} is not part of this search tree")]
    UnknownNode { id: usize },

    /// Board layout text could not be parsed.
    #[error("invalid layout at line {line}: {reason}")]
    InvalidLayout { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Adapter for `Vec::try_reserve` failures.
    pub(crate) fn out_of_memory(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |_| SearchError::OutOfMemory { what }
    }
}
