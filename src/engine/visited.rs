// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visited table for transposition detection.
//!
//! An open-addressing hash set of [`Grid`]s with linear probing. Entries
//! are only ever added during a search. Capacity is a power of two so the
//! probe index is a mask of the grid fingerprint.
//!
//! When an insertion would take the table past its maximum load factor the
//! configured [`CapacityPolicy`] decides: `Grow` doubles the table and
//! rehashes, `Fixed` returns [`SearchError::VisitedTableFull`]. Either way
//! a free slot always remains, so a lookup for an absent grid terminates
//! and never misses a present one.

use crate::config::{CapacityPolicy, SearchConfig};
use crate::error::{SearchError, SearchResult};
use crate::state::Grid;
use tracing::debug;

#[derive(Debug)]
pub struct VisitedTable {
    slots: Vec<Option<Grid>>,
    len: usize,
    max_load_factor: f64,
    policy: CapacityPolicy,
    growths: u64,
}

impl VisitedTable {
    const MIN_CAPACITY: usize = 8;

    /// Create a table with at least `capacity` slots.
    pub fn new(
        capacity: usize,
        max_load_factor: f64,
        policy: CapacityPolicy,
    ) -> SearchResult<Self> {
        let capacity = capacity
            .max(Self::MIN_CAPACITY)
            .checked_next_power_of_two()
            .ok_or(SearchError::OutOfMemory { what: "visited table" })?;
        Ok(Self {
            slots: Self::allocate(capacity)?,
            len: 0,
            max_load_factor: max_load_factor.clamp(0.05, 0.95),
            policy,
            growths: 0,
        })
    }

    pub fn from_config(config: &SearchConfig) -> SearchResult<Self> {
        Self::new(
            config.visited_capacity,
            config.max_load_factor,
            config.capacity_policy,
        )
    }

    /// True iff an equal grid was inserted before.
    pub fn contains(&self, grid: &Grid) -> bool {
        let mask = self.slots.len() - 1;
        let mut index = grid.fingerprint() as usize & mask;
        loop {
            match &self.slots[index] {
                None => return false,
                Some(stored) if stored == grid => return true,
                Some(_) => index = (index + 1) & mask,
            }
        }
    }

    /// Record `grid`. Returns false if it was already present.
    pub fn insert(&mut self, grid: Grid) -> SearchResult<bool> {
        if self.contains(&grid) {
            return Ok(false);
        }
        if (self.len + 1) as f64 > self.max_load_factor * self.slots.len() as f64 {
            match self.policy {
                CapacityPolicy::Grow => self.grow()?,
                CapacityPolicy::Fixed => {
                    return Err(SearchError::VisitedTableFull {
                        capacity: self.slots.len(),
                    })
                }
            }
        }
        Self::place(&mut self.slots, grid);
        self.len += 1;
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// How many times the table has doubled.
    pub fn growths(&self) -> u64 {
        self.growths
    }

    /// Drop every entry and give the memory back.
    pub fn clear(&mut self) {
        self.slots = vec![None; Self::MIN_CAPACITY];
        self.len = 0;
    }

    fn grow(&mut self) -> SearchResult<()> {
        let capacity = self
            .slots
            .len()
            .checked_mul(2)
            .ok_or(SearchError::OutOfMemory { what: "visited table" })?;
        let mut slots = Self::allocate(capacity)?;
        for grid in self.slots.drain(..).flatten() {
            Self::place(&mut slots, grid);
        }
        self.slots = slots;
        self.growths += 1;
        debug!(capacity, entries = self.len, "visited table grew");
        Ok(())
    }

    fn allocate(capacity: usize) -> SearchResult<Vec<Option<Grid>>> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(SearchError::out_of_memory("visited table"))?;
        slots.resize(capacity, None);
        Ok(slots)
    }

    /// Put `grid` in the first free slot of its probe sequence.
    fn place(slots: &mut [Option<Grid>], grid: Grid) {
        let mask = slots.len() - 1;
        let mut index = grid.fingerprint() as usize & mask;
        while slots[index].is_some() {
            index = (index + 1) & mask;
        }
        slots[index] = Some(grid);
    }
}
