//! Driving Ports (API - Inbound)

use crate::domain::{CommitteeDecision, CommitteeStatus, PhaseTransition, RevealOutcome};
use crate::error::CommitteeResult;
use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight, Hash};

/// Point-in-time view of a committee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeSnapshot {
    pub address: Address,
    pub consensus: Address,
    pub proposal: Hash,
    pub size: usize,
    pub status: CommitteeStatus,
    /// Members in entry order
    pub members: Vec<Address>,
    pub activation_block_height: Option<BlockHeight>,
    pub commit_timeout_block_height: Option<BlockHeight>,
    pub reveal_timeout_block_height: Option<BlockHeight>,
    pub commits: usize,
    pub reveals: usize,
}

/// Primary Committee API
///
/// Every call reads the current block height from the committee's clock and
/// applies its transition atomically; a rejected call changes nothing.
pub trait CommitteeApi: Send + Sync {
    /// Enter a validator. Only the committee's consensus may call this.
    fn enter_member(&self, caller: Address, validator: Address) -> CommitteeResult<()>;

    /// Undefined → Cooldown once quorum members entered
    fn cooldown_committee(&self) -> CommitteeResult<PhaseTransition>;

    /// Cooldown → CommitPhase once the activation height is reached
    fn activate_committee(&self) -> CommitteeResult<PhaseTransition>;

    /// CommitPhase → RevealPhase once the commit timeout is reached; no-op before
    fn close_commit_phase(&self) -> CommitteeResult<PhaseTransition>;

    /// Store a member's sealed vote
    fn submit_commit(&self, validator: Address, sealed_vote: Hash) -> CommitteeResult<()>;

    /// Open a member's sealed vote
    fn reveal_vote(&self, validator: Address, vote: Hash, salt: Hash)
        -> CommitteeResult<RevealOutcome>;

    /// Tally reveals after the reveal timeout (or once everyone revealed)
    fn finalize(&self) -> CommitteeResult<CommitteeDecision>;

    fn status(&self) -> CommitteeStatus;

    fn decision(&self) -> Option<CommitteeDecision>;

    fn snapshot(&self) -> CommitteeSnapshot;
}
