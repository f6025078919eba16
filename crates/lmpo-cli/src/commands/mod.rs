//! CLI command implementations.

pub mod common;
pub mod plot;
pub mod show;
pub mod solve;
pub mod topologies;
pub mod version;
