//! High-level attractor solver
//!
//! Unified entry point over the three engines:
//! - explicit engine selection (naive / worklist / frontier)
//! - automatic selection by graph size
//!
//! # Usage
//! ```text
//! use gamegraph_attractor::{AttractorSolver, SolverConfig, EngineKind};
//!
//! let solver = AttractorSolver::new(SolverConfig::default());
//! let outcome = solver.solve(&graph, &[41, 42])?;
//! assert!(outcome.result.attractor.contains(42));
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::Result;
use crate::features::attractor::domain::{AttractorResult, GameGraph, NodeId};
use crate::features::attractor::infrastructure::{
    BspFrontierSolver, FrontierConfig, NaiveFixpointSolver, WorklistFixpointSolver,
};
use crate::features::attractor::ports::AttractorEngine;

/// Engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    /// Full-scan baseline: O(rounds × graph), correctness oracle
    Naive,

    /// Incremental worklist: O(edges) amortized, best serial choice
    Worklist,

    /// Round-synchronized parallel frontier sweeps
    Frontier,

    /// Automatic: choose by node count
    Auto,
}

impl Default for EngineKind {
    fn default() -> Self {
        EngineKind::Auto
    }
}

/// Solver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Engine to run
    pub engine: EngineKind,

    /// Node count at which Auto switches from worklist to frontier
    pub auto_threshold: usize,

    /// Frontier engine tuning
    pub frontier: FrontierConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Auto,
            auto_threshold: 50_000,
            frontier: FrontierConfig::default(),
        }
    }
}

/// Outcome of a facade-level solve
#[derive(Debug, Clone)]
pub struct SolverOutcome {
    /// The engine result
    pub result: AttractorResult,

    /// Which engine actually ran
    pub engine_used: EngineKind,
}

/// High-level solver dispatching to a configured engine
pub struct AttractorSolver {
    config: SolverConfig,
}

impl Default for AttractorSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl AttractorSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve with the configured engine, reporting which one ran.
    pub fn solve(&self, graph: &GameGraph, target: &[NodeId]) -> Result<SolverOutcome> {
        let (engine_used, engine) = self.build_engine(graph.node_count());
        let result = engine.solve(graph, target)?;

        info!(
            "Attractor solved by {} engine: {} of {} nodes in {:.3} ms",
            engine.name(),
            result.stats.attractor_size,
            result.stats.nodes_total,
            result.stats.duration_ms
        );

        Ok(SolverOutcome {
            result,
            engine_used,
        })
    }

    fn build_engine(&self, node_count: usize) -> (EngineKind, Box<dyn AttractorEngine>) {
        match self.config.engine {
            EngineKind::Naive => (EngineKind::Naive, Box::new(NaiveFixpointSolver::new())),
            EngineKind::Worklist => (EngineKind::Worklist, Box::new(WorklistFixpointSolver::new())),
            EngineKind::Frontier => (
                EngineKind::Frontier,
                Box::new(BspFrontierSolver::with_config(self.config.frontier.clone())),
            ),
            EngineKind::Auto => {
                if node_count >= self.config.auto_threshold {
                    (
                        EngineKind::Frontier,
                        Box::new(BspFrontierSolver::with_config(self.config.frontier.clone())),
                    )
                } else {
                    (EngineKind::Worklist, Box::new(WorklistFixpointSolver::new()))
                }
            }
        }
    }
}
