//! Dense node set over a fixed universe
//!
//! Membership structure shared by the target and attractor sets: a fixed
//! bool array indexed by node id plus a length counter. Ids are dense in
//! `[0, node_count)`, so direct indexing beats hashing in every solver loop.

use crate::errors::{AttractorError, Result};

use super::game_graph::NodeId;

/// Set of node ids within a fixed universe `[0, universe)`
///
/// Equality compares both universe size and membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet {
    members: Vec<bool>,
    len: usize,
}

impl NodeSet {
    /// Create an empty set over `[0, universe)`.
    pub fn with_universe(universe: usize) -> Self {
        Self {
            members: vec![false; universe],
            len: 0,
        }
    }

    /// Create a set from known-valid ids. Panics on out-of-universe ids;
    /// use `from_target` for caller-supplied input.
    pub fn from_members(universe: usize, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut set = Self::with_universe(universe);
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Create a set from a caller-supplied target sequence, rejecting ids
    /// outside `[0, universe)` with `InvalidTarget`. Duplicates collapse.
    pub fn from_target(universe: usize, target: &[NodeId]) -> Result<Self> {
        let mut set = Self::with_universe(universe);
        for &id in target {
            if id as usize >= universe {
                return Err(AttractorError::invalid_target(format!(
                    "target id {} outside graph of {} nodes",
                    id, universe
                )));
            }
            set.insert(id);
        }
        Ok(set)
    }

    /// Insert `id`, returning true when it was not yet a member.
    #[inline]
    pub fn insert(&mut self, id: NodeId) -> bool {
        let slot = &mut self.members[id as usize];
        if *slot {
            false
        } else {
            *slot = true;
            self.len += 1;
            true
        }
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.members
            .get(id as usize)
            .copied()
            .unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn universe(&self) -> usize {
        self.members.len()
    }

    /// Iterate members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(id, &member)| member.then_some(id as NodeId))
    }

    pub fn to_sorted_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }

    pub fn is_superset_of(&self, other: &NodeSet) -> bool {
        other.iter().all(|id| self.contains(id))
    }
}
