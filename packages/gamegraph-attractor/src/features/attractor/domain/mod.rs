//! Domain model: game graph, node sets, solver output

mod game_graph;
mod node_set;
mod solve_result;

pub use game_graph::{GameGraph, NodeId, Owner};
pub use node_set::NodeSet;
pub use solve_result::{AttractorResult, SolveStats};
