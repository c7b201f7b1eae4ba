//! Domain module for the Consensus subsystem
//!
//! - core: Core lifetime and validator bookkeeping
//! - registry: metachain assignments, lifetimes and committee decisions

pub mod core;
pub mod registry;

pub use self::core::{Core, CoreError, CoreLifetime};
pub use registry::{CommitteeRegistration, DecisionEffect, Registry};
