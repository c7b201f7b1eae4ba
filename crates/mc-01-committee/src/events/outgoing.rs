//! Outgoing events for the Committee subsystem
//!
//! The service queues these as transitions happen; whoever drives the
//! committee drains them with `take_events` and forwards decisions to
//! Consensus.

use crate::domain::{CommitteeDecision, CommitteeStatus};
use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight};

/// Emitted on every status change
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChangedEvent {
    pub committee: Address,
    pub from: CommitteeStatus,
    pub to: CommitteeStatus,
    pub block_height: BlockHeight,
}

impl PhaseChangedEvent {
    pub fn new(
        committee: Address,
        from: CommitteeStatus,
        to: CommitteeStatus,
        block_height: BlockHeight,
    ) -> Self {
        Self {
            committee,
            from,
            to,
            block_height,
        }
    }
}

/// Events published by a committee
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitteeEvent {
    PhaseChanged(PhaseChangedEvent),
    /// The round ended, committed or invalid
    Decided(CommitteeDecision),
}

impl CommitteeEvent {
    pub fn as_decision(&self) -> Option<&CommitteeDecision> {
        match self {
            CommitteeEvent::Decided(decision) => Some(decision),
            CommitteeEvent::PhaseChanged(_) => None,
        }
    }
}
