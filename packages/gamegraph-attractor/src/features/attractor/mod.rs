//! Attractor computation over two-player game graphs
//!
//! The attractor of a target set W is the least set A ⊇ W closed under the
//! membership rule: an existential node joins once one successor is in A, a
//! universal node joins once all of its successors are in A (and it has at
//! least one). Three engines compute the same closure under different
//! schedules:
//!
//! - `NaiveFixpointSolver`: full sweeps, the correctness oracle
//! - `WorklistFixpointSolver`: incremental, edge-amortized
//! - `BspFrontierSolver`: bulk-synchronous parallel rounds
//!
//! Layout: `domain` (graph model, node sets, results), `infrastructure`
//! (the engines), `application` (engine selection facade), `ports` (the
//! `AttractorEngine` seam).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{AttractorSolver, EngineKind, SolverConfig, SolverOutcome};
pub use domain::{AttractorResult, GameGraph, NodeId, NodeSet, Owner, SolveStats};
pub use infrastructure::{
    BspFrontierSolver, FrontierConfig, NaiveFixpointSolver, WorklistFixpointSolver,
};
pub use ports::{solve_with, AttractorEngine};
