//! Adapters for the Consensus subsystem

pub mod local_core;
pub mod reputation;

pub use local_core::LocalCore;
pub use reputation::{InMemoryReputation, ReputationEntry};
