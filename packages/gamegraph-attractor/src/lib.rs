/*
 * Gamegraph Attractor - Reachability-game fixpoint engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Boundary models (game description records)
 * - features/    : attractor computation (domain / infrastructure / application / ports)
 *
 * One immutable graph model, three interchangeable engines: naive full
 * scans (oracle), incremental worklist (edge-amortized), bulk-synchronous
 * parallel frontier (rayon). All three converge to the identical closure.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod errors;
pub mod features;
pub mod shared;

// ═══════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{AttractorError, Result};
pub use features::attractor::{
    solve_with, AttractorEngine, AttractorResult, AttractorSolver, BspFrontierSolver, EngineKind,
    FrontierConfig, GameGraph, NaiveFixpointSolver, NodeId, NodeSet, Owner, SolveStats,
    SolverConfig, SolverOutcome, WorklistFixpointSolver,
};
pub use shared::models::{GameGraphRecord, GameNodeRecord};
