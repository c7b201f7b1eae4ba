//! Error types for the Consensus subsystem

use crate::domain::{CoreError, CoreLifetime};
use shared_types::{Address, ErrorKind, Hash, MetachainId};
use thiserror::Error;

/// Consensus subsystem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsensusError {
    #[error("Metachain id is 0.")]
    InvalidMetachainId,

    #[error("Core address is 0.")]
    InvalidCoreAddress,

    #[error("Committee address is 0.")]
    InvalidCommitteeAddress,

    /// Core passed by the caller is not the one assigned to the metachain
    #[error("Core is not assigned for the specified metachain id. metachain={metachain_id}, core={core}")]
    CoreNotAssigned {
        metachain_id: MetachainId,
        core: Address,
    },

    #[error("Core lifetime status must be genesis or active. core={core}, lifetime={lifetime}")]
    InvalidCoreLifetime { core: Address, lifetime: CoreLifetime },

    #[error("Reputation ledger is not set")]
    ReputationNotSet,

    /// Core rejected the forwarded call
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Reputation ledger rejected the forwarded call
    #[error("Reputation error: {reason}")]
    Reputation { reason: String },

    #[error("Committee {committee} is not registered for proposal 0x{}", hex::encode(.proposal))]
    CommitteeNotRegistered { committee: Address, proposal: Hash },

    #[error("A committee is already registered for proposal 0x{}", hex::encode(.proposal))]
    CommitteeAlreadyRegistered { proposal: Hash },

    #[error("Decision already registered for proposal 0x{}", hex::encode(.proposal))]
    DecisionAlreadyRegistered { proposal: Hash },
}

impl ConsensusError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConsensusError::InvalidMetachainId
            | ConsensusError::InvalidCoreAddress
            | ConsensusError::InvalidCommitteeAddress => ErrorKind::InvalidArgument,
            ConsensusError::CoreNotAssigned { .. }
            | ConsensusError::InvalidCoreLifetime { .. }
            | ConsensusError::CommitteeNotRegistered { .. } => ErrorKind::Unauthorized,
            ConsensusError::ReputationNotSet | ConsensusError::Reputation { .. } => {
                ErrorKind::InvalidState
            }
            ConsensusError::Core(err) => err.kind(),
            ConsensusError::CommitteeAlreadyRegistered { .. }
            | ConsensusError::DecisionAlreadyRegistered { .. } => ErrorKind::Conflict,
        }
    }
}

/// Result type for Consensus operations
pub type ConsensusResult<T> = Result<T, ConsensusError>;
