//! Shared solver output types

use super::node_set::NodeSet;

/// Result of one attractor computation
#[derive(Debug, Clone)]
pub struct AttractorResult {
    /// Final attractor set, a superset of the target
    pub attractor: NodeSet,

    /// Solver-specific work counter: full passes for the sweep engines
    /// (naive and frontier, where the terminating empty pass counts),
    /// worklist pops for the worklist engine. Units are not comparable
    /// across engines; observability only.
    pub work_metric: usize,

    /// Statistics
    pub stats: SolveStats,
}

/// Per-solve statistics
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    pub nodes_total: usize,
    /// Distinct target ids after de-duplication
    pub target_size: usize,
    pub attractor_size: usize,
    /// Membership-rule / predecessor examinations performed
    pub rule_evaluations: usize,
    pub duration_ms: f64,
}
