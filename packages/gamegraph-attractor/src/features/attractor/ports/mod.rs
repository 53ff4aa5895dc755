//! Ports (interfaces) for attractor engines
//!
//! One seam for all solving strategies:
//! - **Trait objects**: runtime engine selection (`Box<dyn AttractorEngine>`)
//! - **Generic bounds**: zero-cost compile-time selection (`E: AttractorEngine`)

use crate::errors::Result;
use crate::features::attractor::domain::{AttractorResult, GameGraph, NodeId};

/// An attractor computation engine
///
/// Implementations are pure: `solve` reads the graph, never mutates it, and
/// keeps no state between calls, so one engine value can serve concurrent
/// solves.
///
/// # Example (generic, zero-cost)
/// ```ignore
/// fn close<E: AttractorEngine>(engine: &E, graph: &GameGraph, target: &[NodeId]) {
///     let result = engine.solve(graph, target).unwrap();
///     assert!(result.attractor.len() >= target.len());
/// }
/// ```
pub trait AttractorEngine: Send + Sync {
    /// Short engine identifier for logs and reports
    fn name(&self) -> &'static str;

    /// Compute the attractor of `target` in `graph`.
    fn solve(&self, graph: &GameGraph, target: &[NodeId]) -> Result<AttractorResult>;
}

/// Run any engine through the port (compile-time polymorphism).
pub fn solve_with<E: AttractorEngine>(
    engine: &E,
    graph: &GameGraph,
    target: &[NodeId],
) -> Result<AttractorResult> {
    engine.solve(graph, target)
}
