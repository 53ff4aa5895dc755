//! Application layer: engine selection facade

mod solver;

pub use solver::{AttractorSolver, EngineKind, SolverConfig, SolverOutcome};
