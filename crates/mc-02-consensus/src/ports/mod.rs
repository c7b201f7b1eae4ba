//! Ports module for the Consensus subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::ConsensusApi;
pub use outbound::{CoreGateway, ReputationLedger};
