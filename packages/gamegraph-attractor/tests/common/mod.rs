//! Common test utilities for gamegraph-attractor
//!
//! This module provides shared fixtures, assertions, and builders
//! for the integration suites.

mod fixtures;
mod assertions;
mod builders;

// Re-export all utilities
pub use fixtures::*;
pub use assertions::*;
pub use builders::*;
