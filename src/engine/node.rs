// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search-tree nodes and the arena that owns them.
//!
//! Nodes are addressed by [`NodeId`] handles into a [`NodeArena`]. Each node
//! keeps a non-owning link to its parent, used to rebuild paths and to walk
//! up during cleanup.
//!
//! # Lifetime
//!
//! Every live slot carries a reference count: one per live child, plus one
//! while a holder (the frontier stack or the driver) has the node. A node is
//! only released once its count reaches zero, so a release can never leave a
//! stack entry pointing at a freed ancestor. Handles carry a generation,
//! so a stale handle to a reused slot is rejected rather than aliased.
//!
//! ```text
//! root (refs 2) ─┬─ a (refs 1: held by stack)
//!                └─ b (refs 1: held by driver) ── c (refs 1: stack)
//! ```

use crate::error::{SearchError, SearchResult};
use crate::geometry::{Move, Position};
use crate::rules::Rules;
use crate::state::State;
use std::fmt;

/// Handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index (for diagnostics).
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// One search-tree node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Owned copy of the board.
    pub state: State,
    /// None for the root.
    pub parent: Option<NodeId>,
    /// The move that produced this node from its parent (None for the root).
    pub mv: Option<Move>,
    pub depth: usize,
}

#[derive(Debug)]
struct Entry {
    node: Node,
    refs: u32,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Owner of every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    created: u64,
    released: u64,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root node from a copy of `initial`.
    ///
    /// The caller holds the returned node.
    pub fn create_root(&mut self, initial: &State) -> SearchResult<NodeId> {
        self.alloc(Node {
            state: *initial,
            parent: None,
            mv: None,
            depth: 0,
        })
    }

    /// Create the child reached by playing `mv` from `position` in `parent`.
    ///
    /// The child's state is a copy of the parent's with the cursor moved to
    /// `position`, the peg selected, and the move executed. `parent` itself is
    /// not modified apart from gaining a reference from the child. The caller
    /// holds the returned node.
    pub fn expand<R: Rules>(
        &mut self,
        parent: NodeId,
        position: Position,
        mv: Move,
        rules: &R,
    ) -> SearchResult<NodeId> {
        let source = self.get(parent)?;
        let mut state = source.state;
        let depth = source.depth + 1;

        state.cursor = position;
        state.selected = true;
        rules.execute_move(&mut state, position, mv);

        let child = self.alloc(Node {
            state,
            parent: Some(parent),
            mv: Some(mv),
            depth,
        })?;
        self.entry_mut(parent)?.refs += 1;
        Ok(child)
    }

    pub fn get(&self, id: NodeId) -> SearchResult<&Node> {
        Ok(&self.entry(id)?.node)
    }

    pub fn state(&self, id: NodeId) -> SearchResult<&State> {
        Ok(&self.entry(id)?.node.state)
    }

    /// Current reference count of a live node.
    pub fn refs(&self, id: NodeId) -> SearchResult<u32> {
        Ok(self.entry(id)?.refs)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entry(id).is_ok()
    }

    /// Let go of the holder reference on `id` without releasing anything.
    ///
    /// Used when an expanded node keeps live children: from then on the
    /// children alone keep it alive.
    pub fn drop_hold(&mut self, id: NodeId) -> SearchResult<()> {
        let entry = self.entry_mut(id)?;
        if entry.refs == 0 {
            return Err(SearchError::NotHeld { id: id.index() });
        }
        entry.refs -= 1;
        Ok(())
    }

    /// Let go of `node` and release it together with every ancestor that no
    /// other live branch still needs.
    ///
    /// For a lone chain this releases everything back to the root. The walk
    /// stops at the first ancestor that still has live references.
    ///
    /// Returns the number of nodes released.
    pub fn free_chain(&mut self, node: NodeId) -> SearchResult<usize> {
        self.drop_hold(node)?;
        let mut current = Some(node);
        let mut released = 0;
        while let Some(id) = current {
            if self.entry(id)?.refs > 0 {
                break;
            }
            current = self.release(id)?;
            released += 1;
        }
        Ok(released)
    }

    /// Backtracking cleanup for an exhausted branch.
    ///
    /// Lets go of `node`, then walks up through parent links releasing each
    /// node while its piece count is no greater than `boundary`'s. It stops
    /// at the first node with more pieces than `boundary`, or with live
    /// references left. With rules where every move removes exactly one
    /// piece, this frees the dead branch down to the depth of `boundary`,
    /// i.e. up to their common ancestor.
    ///
    /// Returns the number of nodes released.
    pub fn prune_to<R: Rules>(
        &mut self,
        node: NodeId,
        boundary: NodeId,
        rules: &R,
    ) -> SearchResult<usize> {
        let limit = rules.num_pegs(self.state(boundary)?);
        self.drop_hold(node)?;

        let mut current = Some(node);
        let mut released = 0;
        while let Some(id) = current {
            let entry = self.entry(id)?;
            if entry.refs > 0 || rules.num_pegs(&entry.node.state) > limit {
                break;
            }
            current = self.release(id)?;
            released += 1;
        }
        Ok(released)
    }

    /// Release every node still live, regardless of references.
    ///
    /// Terminal sweep only. Returns how many nodes it had to release.
    pub fn release_all(&mut self) -> usize {
        let mut swept = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                swept += 1;
            }
        }
        self.released += swept as u64;
        swept
    }

    /// Total nodes allocated so far.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Total nodes released so far.
    pub fn released(&self) -> u64 {
        self.released
    }

    /// Nodes currently live.
    pub fn live(&self) -> u64 {
        self.created - self.released
    }

    fn alloc(&mut self, node: Node) -> SearchResult<NodeId> {
        let entry = Entry { node, refs: 1 };
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some(entry);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                // Keep room for every slot on the free list so that
                // releasing never allocates.
                self.slots
                    .try_reserve(1)
                    .map_err(SearchError::out_of_memory("node arena"))?;
                self.free
                    .try_reserve(self.slots.len() + 1 - self.free.len())
                    .map_err(SearchError::out_of_memory("node free list"))?;
                let index = u32::try_from(self.slots.len())
                    .map_err(|_| SearchError::OutOfMemory { what: "node arena" })?;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        };
        self.created += 1;
        Ok(id)
    }

    /// Release a node with no references left, returning its parent.
    ///
    /// The parent must still count this node among its references.
    fn release(&mut self, id: NodeId) -> SearchResult<Option<NodeId>> {
        let entry = self.entry(id)?;
        if entry.refs > 0 {
            return Err(SearchError::NodeStillReferenced {
                id: id.index(),
                refs: entry.refs,
            });
        }
        if let Some(parent) = entry.node.parent {
            if self.entry(parent)?.refs == 0 {
                return Err(SearchError::NotHeld { id: parent.index() });
            }
        }

        let slot = &mut self.slots[id.index()];
        let entry = slot.entry.take().ok_or(SearchError::NodeReleased { id: id.index() })?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.released += 1;

        if let Some(parent) = entry.node.parent {
            self.entry_mut(parent)?.refs -= 1;
        }
        Ok(entry.node.parent)
    }

    fn entry(&self, id: NodeId) -> SearchResult<&Entry> {
        let slot = self
            .slots
            .get(id.index())
            .ok_or(SearchError::UnknownNode { id: id.index() })?;
        match &slot.entry {
            Some(entry) if slot.generation == id.generation => Ok(entry),
            _ => Err(SearchError::NodeReleased { id: id.index() }),
        }
    }

    fn entry_mut(&mut self, id: NodeId) -> SearchResult<&mut Entry> {
        let slot = self
            .slots
            .get_mut(id.index())
            .ok_or(SearchError::UnknownNode { id: id.index() })?;
        match &mut slot.entry {
            Some(entry) if slot.generation == id.generation => Ok(entry),
            _ => Err(SearchError::NodeReleased { id: id.index() }),
        }
    }
}
