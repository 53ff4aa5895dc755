//! Bulk-synchronous frontier solver
//!
//! Round-synchronized parallel variant of the attractor closure. Each round:
//!
//! 1. Freeze the current membership (the round snapshot).
//! 2. Partition `[0, node_count)` across workers; every worker evaluates the
//!    membership rule for its non-member nodes against the snapshot only.
//! 3. Merge the per-partition joiner lists (associative and commutative, so
//!    worker completion order cannot change the outcome).
//! 4. Empty merge → fixpoint reached; otherwise add the joiners and repeat.
//!
//! The reduce over partitions is the round barrier: no round starts before
//! the previous round's merge has completed. Joins are applied strictly
//! after the barrier, so within a round no worker can observe another
//! worker's join; rounds therefore advance in lockstep with the naive
//! solver's passes, and the two report identical work metrics.
//!
//! A worker that fails mid-round poisons the whole round: the failure is
//! caught at the partition boundary, the merge short-circuits, and the solve
//! returns `PartitionEvaluation` with no partial membership adopted.
//!
//! # References
//! - Valiant, L. G. (1990). "A Bridging Model for Parallel Computation"
//! - Zielonka, W. (1998). "Infinite Games on Finitely Coloured Graphs"

use std::ops::Range;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AttractorError, Result};
use crate::features::attractor::domain::{
    AttractorResult, GameGraph, NodeId, NodeSet, SolveStats,
};
use crate::features::attractor::ports::AttractorEngine;

/// Frontier solver tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontierConfig {
    /// Worker partitions per round; `None` sizes to available parallelism.
    pub partitions: Option<usize>,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self { partitions: None }
    }
}

/// Round-synchronized snapshot-evaluate-merge solver
#[derive(Debug, Clone, Default)]
pub struct BspFrontierSolver {
    config: FrontierConfig,
}

impl BspFrontierSolver {
    pub fn new() -> Self {
        Self::with_config(FrontierConfig::default())
    }

    pub fn with_config(config: FrontierConfig) -> Self {
        Self { config }
    }

    /// Compute the attractor of `target`.
    ///
    /// `work_metric` is the number of rounds executed, counting the
    /// terminating empty round; it always equals the naive solver's pass
    /// count on the same input. Fails with `InvalidTarget` before the first
    /// round, or `PartitionEvaluation` if a round's worker fails.
    pub fn solve(&self, graph: &GameGraph, target: &[NodeId]) -> Result<AttractorResult> {
        let start = Instant::now();
        let mut attractor = NodeSet::from_target(graph.node_count(), target)?;
        let target_size = attractor.len();
        let partitions = self.partition_count(graph.node_count());

        let mut rounds = 0usize;
        let mut rule_evaluations = 0usize;

        loop {
            rounds += 1;
            // Workers read the round-start membership only; joins are
            // merged after the barrier.
            let (joiners, evaluations) =
                self.evaluate_round(graph, &attractor, partitions, rounds)?;
            rule_evaluations += evaluations;
            if joiners.is_empty() {
                break;
            }
            for &v in &joiners {
                attractor.insert(v);
            }
        }

        debug!(
            "Frontier solver converged after {} rounds ({} of {} nodes attracted, {} partitions)",
            rounds,
            attractor.len(),
            graph.node_count(),
            partitions
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

    fn partition_count(&self, node_count: usize) -> usize {
        let requested = self.config.partitions.unwrap_or_else(num_cpus::get);
        requested.clamp(1, node_count.max(1))
    }

    /// Evaluate one round over all partitions; returns at the round barrier.
    #[cfg(feature = "parallel")]
    fn evaluate_round(
        &self,
        graph: &GameGraph,
        members: &NodeSet,
        partitions: usize,
        round: usize,
    ) -> Result<(Vec<NodeId>, usize)> {
        use rayon::prelude::*;

        let node_count = graph.node_count();
        let chunk = (node_count + partitions - 1) / partitions;
        (0..partitions)
            .into_par_iter()
            .map(|p| {
                let lo = p * chunk;
                let hi = ((p + 1) * chunk).min(node_count);
                run_partition(graph, members, lo..hi, round)
            })
            .try_reduce(
                || (Vec::new(), 0),
                |(mut joiners, evaluations), (mut more, more_evaluations)| {
                    joiners.append(&mut more);
                    Ok((joiners, evaluations + more_evaluations))
                },
            )
    }

    /// Evaluate one round over all partitions, one worker at a time.
    #[cfg(not(feature = "parallel"))]
    fn evaluate_round(
        &self,
        graph: &GameGraph,
        members: &NodeSet,
        partitions: usize,
        round: usize,
    ) -> Result<(Vec<NodeId>, usize)> {
        let node_count = graph.node_count();
        let chunk = (node_count + partitions - 1) / partitions;
        let mut joiners = Vec::new();
        let mut evaluations = 0usize;
        for p in 0..partitions {
            let lo = p * chunk;
            let hi = ((p + 1) * chunk).min(node_count);
            let (mut more, more_evaluations) = run_partition(graph, members, lo..hi, round)?;
            joiners.append(&mut more);
            evaluations += more_evaluations;
        }
        Ok((joiners, evaluations))
    }
}

impl AttractorEngine for BspFrontierSolver {
    fn name(&self) -> &'static str {
        "frontier"
    }

    fn solve(&self, graph: &GameGraph, target: &[NodeId]) -> Result<AttractorResult> {
        BspFrontierSolver::solve(self, graph, target)
    }
}

/// Run one partition's evaluation, converting a worker panic into a
/// round-level failure so no partial result can be merged.
fn run_partition(
    graph: &GameGraph,
    members: &NodeSet,
    range: Range<usize>,
    round: usize,
) -> Result<(Vec<NodeId>, usize)> {
    let span = range.clone();
    catch_unwind(AssertUnwindSafe(|| evaluate_partition(graph, members, range))).map_err(|_| {
        AttractorError::partition_evaluation(format!(
            "worker for nodes {}..{} failed in round {}",
            span.start, span.end, round
        ))
    })
}

fn evaluate_partition(
    graph: &GameGraph,
    members: &NodeSet,
    range: Range<usize>,
) -> (Vec<NodeId>, usize) {
    let mut joiners = Vec::new();
    let mut evaluations = 0usize;
    for v in range {
        let v = v as NodeId;
        if members.contains(v) {
            continue;
        }
        evaluations += 1;
        if graph.can_join(v, members) {
            joiners.push(v);
        }
    }
    (joiners, evaluations)
}
