//! Ports module for the Committee subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::CommitteeApi;
pub use outbound::BlockClock;
