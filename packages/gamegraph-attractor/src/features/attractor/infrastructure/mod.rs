//! Solver engines

pub mod frontier_solver;
pub mod naive_solver;
pub mod worklist_solver;

pub use frontier_solver::{BspFrontierSolver, FrontierConfig};
pub use naive_solver::NaiveFixpointSolver;
pub use worklist_solver::WorklistFixpointSolver;
