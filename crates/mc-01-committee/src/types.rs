use crate::domain::QuorumPolicy;
use crate::error::{CommitteeError, CommitteeResult};
use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;

/// Blocks between cooldown and the earliest possible activation.
pub const COMMITTEE_ACTIVATION_DELAY: BlockHeight = 14;
/// Length of the commit phase, counted from activation.
pub const COMMITTEE_COMMIT_PHASE_TIMEOUT: BlockHeight = 20;
/// Length of the reveal phase, counted from the close of the commit phase.
pub const COMMITTEE_REVEAL_PHASE_TIMEOUT: BlockHeight = 20;

/// Committee configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitteeConfig {
    /// Blocks from cooldown until activation is permitted
    pub activation_delay: BlockHeight,
    /// Blocks from activation until the commit phase may be closed
    pub commit_phase_timeout: BlockHeight,
    /// Blocks from commit close until reveals stop being accepted
    pub reveal_phase_timeout: BlockHeight,
    /// Members required before cooldown
    pub quorum_policy: QuorumPolicy,
    /// Finalize as soon as every committed member has revealed,
    /// instead of waiting for an explicit finalize after the reveal timeout
    pub finalize_on_full_reveal: bool,
}

impl Default for CommitteeConfig {
    fn default() -> Self {
        Self {
            activation_delay: COMMITTEE_ACTIVATION_DELAY,
            commit_phase_timeout: COMMITTEE_COMMIT_PHASE_TIMEOUT,
            reveal_phase_timeout: COMMITTEE_REVEAL_PHASE_TIMEOUT,
            quorum_policy: QuorumPolicy::Strict,
            finalize_on_full_reveal: true,
        }
    }
}

impl CommitteeConfig {
    /// Reject configurations that would let a phase close in the block it opened.
    pub fn validate(&self) -> CommitteeResult<()> {
        if self.commit_phase_timeout == 0 {
            return Err(CommitteeError::InvalidConfig {
                reason: "commit_phase_timeout must be greater than zero".to_string(),
            });
        }
        if self.reveal_phase_timeout == 0 {
            return Err(CommitteeError::InvalidConfig {
                reason: "reveal_phase_timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
