//! Named game graphs used across the integration suites.

use gamegraph_attractor::{
    AttractorEngine, BspFrontierSolver, GameGraph, GameGraphRecord, GameNodeRecord,
    NaiveFixpointSolver, WorklistFixpointSolver,
};

/// Three-node chain `0 -> 1 -> 2` with an existential head, a universal
/// middle, and an existential sink. Attracting to `{2}` pulls in the
/// whole chain one node per round.
pub fn chain_fixture() -> GameGraph {
    GameGraph::build(3, &[0, 1, 0], &[vec![1], vec![2], vec![]])
        .unwrap_or_else(|e| panic!("chain fixture must build: {e}"))
}

/// Universal fork `0 -> {1, 2}` where both branches rejoin at sink `3`.
/// Every node ends up in the attractor of `{3}`.
pub fn diamond_fixture() -> GameGraph {
    GameGraph::build(4, &[1, 0, 0, 0], &[vec![1, 2], vec![3], vec![3], vec![]])
        .unwrap_or_else(|e| panic!("diamond fixture must build: {e}"))
}

/// Universal fork `0 -> {1, 2}` where branch `2` is a universal dead end.
/// Node 1 reaches the sink, but node 0 never joins because branch 2
/// stays outside forever.
pub fn blocked_universal_fixture() -> GameGraph {
    GameGraph::build(4, &[1, 0, 1, 0], &[vec![1, 2], vec![3], vec![], vec![]])
        .unwrap_or_else(|e| panic!("blocked fixture must build: {e}"))
}

/// A single universal node with no outgoing edges.
pub fn lone_universal_fixture() -> GameGraph {
    GameGraph::build(1, &[1], &[vec![]])
        .unwrap_or_else(|e| panic!("lone universal fixture must build: {e}"))
}

/// Serialized form of [`chain_fixture`].
pub fn chain_record() -> GameGraphRecord {
    GameGraphRecord {
        node_count: 3,
        nodes: vec![
            GameNodeRecord { id: 0, owner: 0, edges: vec![1] },
            GameNodeRecord { id: 1, owner: 1, edges: vec![2] },
            GameNodeRecord { id: 2, owner: 0, edges: vec![] },
        ],
    }
}

/// One instance of every engine, for suites that loop over all of them.
pub fn all_engines() -> Vec<Box<dyn AttractorEngine>> {
    vec![
        Box::new(NaiveFixpointSolver::new()),
        Box::new(WorklistFixpointSolver::new()),
        Box::new(BspFrontierSolver::new()),
    ]
}
