//! Events module for the Committee subsystem

pub mod outgoing;

pub use outgoing::{CommitteeEvent, PhaseChangedEvent};
