//! Feature modules

pub mod attractor;
