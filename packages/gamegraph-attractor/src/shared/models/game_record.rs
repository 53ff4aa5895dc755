//! External game graph description
//!
//! The boundary record handed to the core by callers: a node count plus one
//! entry per node carrying its owner and successor list. The record is plain
//! data; validation happens when a `GameGraph` is built from it.

use serde::{Deserialize, Serialize};

/// One node of a game description
///
/// `id` must equal the node's position in the enclosing record. `owner` is a
/// raw player tag (`0` = existential, `1` = universal), range-checked at
/// model construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameNodeRecord {
    pub id: u32,
    pub owner: u8,
    pub edges: Vec<u32>,
}

impl GameNodeRecord {
    pub fn new(id: u32, owner: u8, edges: Vec<u32>) -> Self {
        Self { id, owner, edges }
    }
}

/// A complete game graph description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameGraphRecord {
    pub node_count: usize,
    pub nodes: Vec<GameNodeRecord>,
}

impl GameGraphRecord {
    pub fn new(node_count: usize, nodes: Vec<GameNodeRecord>) -> Self {
        Self { node_count, nodes }
    }

    /// Build a record from per-node `(owner, edges)` pairs, assigning
    /// sequential ids.
    pub fn from_parts(parts: Vec<(u8, Vec<u32>)>) -> Self {
        let nodes = parts
            .into_iter()
            .enumerate()
            .map(|(id, (owner, edges))| GameNodeRecord::new(id as u32, owner, edges))
            .collect::<Vec<_>>();
        Self {
            node_count: nodes.len(),
            nodes,
        }
    }
}
