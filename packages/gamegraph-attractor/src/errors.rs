//! Error types for gamegraph-attractor
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for attractor computation
#[derive(Debug, Error)]
pub enum AttractorError {
    /// Graph construction rejected the input description
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// Target set references nodes outside the graph
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// A partition worker failed during a frontier round
    #[error("Partition evaluation failed: {0}")]
    PartitionEvaluation(String),
}

impl AttractorError {
    /// Create a malformed-graph error
    pub fn malformed_graph(msg: impl Into<String>) -> Self {
        AttractorError::MalformedGraph(msg.into())
    }

    /// Create an invalid-target error
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        AttractorError::InvalidTarget(msg.into())
    }

    /// Create a partition-evaluation error
    pub fn partition_evaluation(msg: impl Into<String>) -> Self {
        AttractorError::PartitionEvaluation(msg.into())
    }
}

/// Result type alias for attractor operations
pub type Result<T> = std::result::Result<T, AttractorError>;
