//! Parameterized graph families for equivalence and stress tests.

use gamegraph_attractor::{GameGraph, NodeId};

/// Chain `0 -> 1 -> ... -> n-1` of existential nodes.
pub fn existential_chain(n: usize) -> GameGraph {
    chain_with_owners(n, |_| 0)
}

/// Chain `0 -> 1 -> ... -> n-1` with owners alternating by position.
/// Single-successor nodes join the attractor regardless of owner, so
/// the attractor of the tail is always the full chain.
pub fn alternating_chain(n: usize) -> GameGraph {
    chain_with_owners(n, |i| (i % 2) as u8)
}

fn chain_with_owners(n: usize, owner_of: impl Fn(usize) -> u8) -> GameGraph {
    let owners: Vec<u8> = (0..n).map(owner_of).collect();
    let edges: Vec<Vec<NodeId>> = (0..n)
        .map(|i| if i + 1 < n { vec![(i + 1) as NodeId] } else { vec![] })
        .collect();
    GameGraph::build(n, &owners, &edges)
        .unwrap_or_else(|e| panic!("chain of {n} must build: {e}"))
}

/// Ring of `n` existential nodes, `i -> (i + 1) % n`.
pub fn existential_ring(n: usize) -> GameGraph {
    let owners = vec![0u8; n];
    let edges: Vec<Vec<NodeId>> = (0..n).map(|i| vec![((i + 1) % n) as NodeId]).collect();
    GameGraph::build(n, &owners, &edges)
        .unwrap_or_else(|e| panic!("ring of {n} must build: {e}"))
}

/// Layered DAG of `depth` layers with `width` nodes each. Every node
/// links to the entire next layer and layer owners alternate starting
/// with existential. Attracting to the last layer absorbs exactly one
/// layer per round.
pub fn layered_graph(width: usize, depth: usize) -> GameGraph {
    let n = width * depth;
    let mut owners = Vec::with_capacity(n);
    let mut edges: Vec<Vec<NodeId>> = Vec::with_capacity(n);
    for layer in 0..depth {
        let next: Vec<NodeId> = if layer + 1 < depth {
            let lo = ((layer + 1) * width) as NodeId;
            (lo..lo + width as NodeId).collect()
        } else {
            Vec::new()
        };
        for _ in 0..width {
            owners.push((layer % 2) as u8);
            edges.push(next.clone());
        }
    }
    GameGraph::build(n, &owners, &edges)
        .unwrap_or_else(|e| panic!("layered {width}x{depth} must build: {e}"))
}

/// Node ids of the last layer of [`layered_graph`].
pub fn last_layer(width: usize, depth: usize) -> Vec<NodeId> {
    let lo = ((depth - 1) * width) as NodeId;
    (lo..lo + width as NodeId).collect()
}
