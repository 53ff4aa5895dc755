//! Naive full-scan fixpoint solver
//!
//! Baseline correctness oracle: every pass re-evaluates the membership rule
//! for all non-members and merges the joiners at the end of the pass, until a
//! pass adds nothing. Every other engine must match its final set exactly.
//!
//! # Complexity
//! - Time: O(rounds × (nodes + edges)), rounds ≤ longest attraction chain
//! - Space: O(nodes)

use std::time::Instant;

use tracing::debug;

use crate::errors::Result;
use crate::features::attractor::domain::{
    AttractorResult, GameGraph, NodeId, NodeSet, SolveStats,
};
use crate::features::attractor::ports::AttractorEngine;

/// Repeated full-graph sweeps until no change
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveFixpointSolver;

impl NaiveFixpointSolver {
    pub fn new() -> Self {
        Self
    }

    /// Compute the attractor of `target`.
    ///
    /// `work_metric` is the number of full passes executed, including the
    /// final pass that adds nothing. Fails with `InvalidTarget` before any
    /// pass runs when `target` references an id outside the graph.
    pub fn solve(&self, graph: &GameGraph, target: &[NodeId]) -> Result<AttractorResult> {
        let start = Instant::now();
        let mut attractor = NodeSet::from_target(graph.node_count(), target)?;
        let target_size = attractor.len();

        let mut rounds = 0usize;
        let mut rule_evaluations = 0usize;
        let mut joiners: Vec<NodeId> = Vec::new();

        loop {
            rounds += 1;
            joiners.clear();
            for v in graph.node_ids() {
                if attractor.contains(v) {
                    continue;
                }
                rule_evaluations += 1;
                if graph.can_join(v, &attractor) {
                    joiners.push(v);
                }
            }
            if joiners.is_empty() {
                break;
            }
            // Merge after the pass: every evaluation in a pass sees the
            // pass-start membership, so pass boundaries line up with the
            // frontier solver's rounds.
            for &v in &joiners {
                attractor.insert(v);
            }
        }

        debug!(
            "Naive fixpoint converged after {} rounds ({} of {} nodes attracted)",
            rounds,
            attractor.len(),
            graph.node_count()
        );

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        let attractor_size = attractor.len();
        Ok(AttractorResult {
            attractor,
            work_metric: rounds,
            stats: SolveStats {
                nodes_total: graph.node_count(),
                target_size,
                attractor_size,
                rule_evaluations,
                duration_ms,
            },
        })
    }
}

impl AttractorEngine for NaiveFixpointSolver {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn solve(&self, graph: &GameGraph, target: &[NodeId]) -> Result<AttractorResult> {
        NaiveFixpointSolver::solve(self, graph, target)
    }
}
