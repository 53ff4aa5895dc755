//! Assertions shared by the integration suites.

use gamegraph_attractor::{AttractorResult, GameGraph, NodeId, NodeSet};

/// Assert two engine results contain exactly the same nodes.
pub fn assert_same_attractor(label: &str, left: &AttractorResult, right: &AttractorResult) {
    assert_eq!(
        left.attractor.to_sorted_vec(),
        right.attractor.to_sorted_vec(),
        "engines disagree on the attractor for {label}"
    );
}

/// Assert no node outside `attractor` satisfies the membership rule.
/// A set that fails this is not a fixpoint.
pub fn assert_closed(graph: &GameGraph, attractor: &NodeSet) {
    for v in graph.node_ids() {
        if !attractor.contains(v) {
            assert!(
                !graph.can_join(v, attractor),
                "node {v} satisfies the membership rule but was left outside"
            );
        }
    }
}

/// Assert every member beyond the target satisfies the membership rule
/// against the final set. Growth is monotone, so a node that qualified
/// when it joined still qualifies at the end.
pub fn assert_justified(graph: &GameGraph, attractor: &NodeSet, target: &[NodeId]) {
    for v in attractor.iter() {
        if !target.contains(&v) {
            assert!(
                graph.can_join(v, attractor),
                "node {v} is in the attractor without a justifying edge"
            );
        }
    }
}
