//! Error types for the Committee subsystem

use crate::domain::CommitteeStatus;
use shared_types::{Address, BlockHeight, ErrorKind};
use thiserror::Error;

/// Committee subsystem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitteeError {
    /// Committee size must be at least one member
    #[error("Committee size must be greater than zero")]
    InvalidSize,

    /// Consensus back-reference is the null address
    #[error("Consensus address is 0")]
    InvalidConsensusAddress,

    /// Validator address is the null address
    #[error("Validator address is 0")]
    InvalidValidatorAddress,

    /// Configuration rejected by `CommitteeConfig::validate`
    #[error("Invalid committee configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Operation attempted outside its required phase
    #[error("Committee must be in the {expected}; it is in the {actual}")]
    InvalidState {
        expected: CommitteeStatus,
        actual: CommitteeStatus,
    },

    /// Block-height gate not yet satisfied
    #[error("Too early: current block {current}, required block {required}")]
    TooEarly {
        current: BlockHeight,
        required: BlockHeight,
    },

    /// Reveal submitted at or after the reveal timeout
    #[error("Reveal window closed at block {deadline}, current block {current}")]
    RevealWindowClosed {
        current: BlockHeight,
        deadline: BlockHeight,
    },

    /// Caller is not the committee's consensus
    #[error("Only consensus can call this function, caller {caller}")]
    NotConsensus { caller: Address },

    /// Validator is not a member of the committee
    #[error("Validator {validator} is not a committee member")]
    NotAMember { validator: Address },

    /// Validator already entered
    #[error("Validator {validator} is already a committee member")]
    DuplicateMember { validator: Address },

    /// Committee already holds `size` members
    #[error("Committee is full: {size} members")]
    CommitteeFull { size: usize },

    /// Cooldown requested before quorum is reached
    #[error("Not enough members: have {have}, need {need}")]
    NotEnoughMembers { have: usize, need: usize },

    /// Second commit from the same member
    #[error("Validator {validator} has already committed")]
    DuplicateCommit { validator: Address },

    /// Reveal from a member that never committed
    #[error("Validator {validator} has not committed")]
    NotCommitted { validator: Address },

    /// Second reveal from the same member
    #[error("Validator {validator} has already revealed")]
    DuplicateReveal { validator: Address },

    /// Revealed vote and salt do not hash to the sealed commit
    #[error("Revealed vote does not match the commit of validator {validator}")]
    CommitMismatch { validator: Address },
}

impl CommitteeError {
    /// Coarse classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommitteeError::InvalidSize
            | CommitteeError::InvalidConsensusAddress
            | CommitteeError::InvalidValidatorAddress
            | CommitteeError::InvalidConfig { .. } => ErrorKind::InvalidArgument,
            CommitteeError::InvalidState { .. }
            | CommitteeError::NotEnoughMembers { .. }
            | CommitteeError::NotCommitted { .. }
            | CommitteeError::RevealWindowClosed { .. } => ErrorKind::InvalidState,
            CommitteeError::TooEarly { .. } => ErrorKind::TooEarly,
            CommitteeError::NotConsensus { .. } | CommitteeError::NotAMember { .. } => {
                ErrorKind::Unauthorized
            }
            CommitteeError::CommitteeFull { .. } => ErrorKind::CapacityExceeded,
            CommitteeError::DuplicateMember { .. }
            | CommitteeError::DuplicateCommit { .. }
            | CommitteeError::DuplicateReveal { .. }
            | CommitteeError::CommitMismatch { .. } => ErrorKind::Conflict,
        }
    }
}

/// Result type for committee operations
pub type CommitteeResult<T> = Result<T, CommitteeError>;
