//! Immutable two-player game graph
//!
//! Index-based model of a directed game graph: a per-node owner array plus
//! flattened outgoing and incoming adjacency with offset tables (CSR layout).
//! Incoming adjacency is derived once at construction by inverting the
//! outgoing edges. The model never changes after construction, so a single
//! instance can be read concurrently by any number of solver rounds.

use crate::errors::{AttractorError, Result};
use crate::shared::models::GameGraphRecord;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::node_set::NodeSet;

/// Node identifier, dense in `[0, node_count)`
pub type NodeId = u32;

/// Which player controls a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// The attracting player: needs one successor inside the attractor
    Existential,
    /// The opponent: needs every successor inside the attractor
    Universal,
}

impl Owner {
    /// Decode the external `0`/`1` tag; any other value is out of range.
    pub fn from_raw(raw: u8) -> Option<Owner> {
        match raw {
            0 => Some(Owner::Existential),
            1 => Some(Owner::Universal),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u8 {
        match self {
            Owner::Existential => 0,
            Owner::Universal => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Owner::Existential => "existential",
            Owner::Universal => "universal",
        }
    }
}

/// Immutable game graph with owner array and CSR adjacency
///
/// Invariant: `incoming(v)` contains `u` iff `v ∈ outgoing(u)`. Successor
/// lists are de-duplicated at construction (duplicate edges carry no
/// semantics), so `out_degree(v)` counts distinct successors.
#[derive(Debug, Clone)]
pub struct GameGraph {
    node_count: usize,
    owners: Vec<Owner>,
    out_offsets: Vec<usize>,
    out_targets: Vec<NodeId>,
    in_offsets: Vec<usize>,
    in_sources: Vec<NodeId>,
}

impl GameGraph {
    /// Build a graph from raw owner tags and per-node successor lists.
    ///
    /// Fails with `MalformedGraph` when `owners` or `edge_lists` disagree
    /// with `node_count` in length, when an owner tag is outside `{0, 1}`,
    /// or when an edge targets a node id outside `[0, node_count)`.
    pub fn build(node_count: usize, owners: &[u8], edge_lists: &[Vec<NodeId>]) -> Result<Self> {
        if node_count > NodeId::MAX as usize {
            return Err(AttractorError::malformed_graph(format!(
                "node count {} exceeds the id space",
                node_count
            )));
        }
        if owners.len() != node_count {
            return Err(AttractorError::malformed_graph(format!(
                "owner array has {} entries for {} nodes",
                owners.len(),
                node_count
            )));
        }
        if edge_lists.len() != node_count {
            return Err(AttractorError::malformed_graph(format!(
                "edge lists have {} entries for {} nodes",
                edge_lists.len(),
                node_count
            )));
        }

        let mut decoded = Vec::with_capacity(node_count);
        for (v, &raw) in owners.iter().enumerate() {
            match Owner::from_raw(raw) {
                Some(owner) => decoded.push(owner),
                None => {
                    return Err(AttractorError::malformed_graph(format!(
                        "node {} has owner {} outside {{0, 1}}",
                        v, raw
                    )));
                }
            }
        }

        // Outgoing CSR, de-duplicating while preserving first-seen order.
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut seen = FxHashSet::default();
        out_offsets.push(0);
        for (v, edges) in edge_lists.iter().enumerate() {
            seen.clear();
            for &target in edges {
                if target as usize >= node_count {
                    return Err(AttractorError::malformed_graph(format!(
                        "node {} has an edge to out-of-range node {}",
                        v, target
                    )));
                }
                if seen.insert(target) {
                    out_targets.push(target);
                }
            }
            out_offsets.push(out_targets.len());
        }

        // Incoming CSR by counting-sort inversion of the outgoing edges.
        let mut in_degrees = vec![0usize; node_count];
        for &target in &out_targets {
            in_degrees[target as usize] += 1;
        }
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut total = 0usize;
        in_offsets.push(0);
        for &degree in &in_degrees {
            total += degree;
            in_offsets.push(total);
        }
        let mut cursors: Vec<usize> = in_offsets[..node_count].to_vec();
        let mut in_sources = vec![0 as NodeId; out_targets.len()];
        for u in 0..node_count {
            for &v in &out_targets[out_offsets[u]..out_offsets[u + 1]] {
                in_sources[cursors[v as usize]] = u as NodeId;
                cursors[v as usize] += 1;
            }
        }

        Ok(Self {
            node_count,
            owners: decoded,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        })
    }

    /// Build a graph from an external description record.
    ///
    /// On top of the `build` checks, verifies that `node_count` matches the
    /// number of node entries and that each entry's `id` equals its position.
    pub fn from_record(record: &GameGraphRecord) -> Result<Self> {
        if record.nodes.len() != record.node_count {
            return Err(AttractorError::malformed_graph(format!(
                "record declares {} nodes but lists {}",
                record.node_count,
                record.nodes.len()
            )));
        }
        for (position, node) in record.nodes.iter().enumerate() {
            if node.id as usize != position {
                return Err(AttractorError::malformed_graph(format!(
                    "node at position {} has id {}",
                    position, node.id
                )));
            }
        }

        let owners: Vec<u8> = record.nodes.iter().map(|n| n.owner).collect();
        let edge_lists: Vec<Vec<NodeId>> = record.nodes.iter().map(|n| n.edges.clone()).collect();
        Self::build(record.node_count, &owners, &edge_lists)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Total number of (distinct) edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Iterate all node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count).map(|v| v as NodeId)
    }

    /// Owner of `v`. `v` must be a valid node id.
    #[inline]
    pub fn owner(&self, v: NodeId) -> Owner {
        self.owners[v as usize]
    }

    /// Distinct successors of `v`, in first-seen input order.
    #[inline]
    pub fn outgoing(&self, v: NodeId) -> &[NodeId] {
        let v = v as usize;
        &self.out_targets[self.out_offsets[v]..self.out_offsets[v + 1]]
    }

    /// Distinct predecessors of `v`, in ascending order.
    #[inline]
    pub fn incoming(&self, v: NodeId) -> &[NodeId] {
        let v = v as usize;
        &self.in_sources[self.in_offsets[v]..self.in_offsets[v + 1]]
    }

    #[inline]
    pub fn out_degree(&self, v: NodeId) -> usize {
        let v = v as usize;
        self.out_offsets[v + 1] - self.out_offsets[v]
    }

    /// Membership rule, the single algorithmic truth shared by every solver:
    /// an existential node joins once any successor is a member, a universal
    /// node joins once it has at least one successor and all of them are
    /// members.
    #[inline]
    pub fn can_join(&self, v: NodeId, members: &NodeSet) -> bool {
        let successors = self.outgoing(v);
        match self.owner(v) {
            Owner::Existential => successors.iter().any(|&w| members.contains(w)),
            Owner::Universal => {
                !successors.is_empty() && successors.iter().all(|&w| members.contains(w))
            }
        }
    }
}
