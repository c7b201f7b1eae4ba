//! Committee decision record

use super::CommitteeStatus;
use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight, Hash};

/// Final result of a committee round.
///
/// Produced once, when the committee leaves the reveal phase. `decision` is
/// set only when `status` is `Committed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeDecision {
    pub committee: Address,
    pub proposal: Hash,
    pub status: CommitteeStatus,
    pub decision: Option<Hash>,
    /// Votes cast for the winning vote (0 when Invalid)
    pub votes: usize,
    /// Members that revealed
    pub revealed: usize,
    /// Revealing members ranked by dislocation distance, closest first
    pub revealers: Vec<Address>,
    /// Block height at which the round was finalized
    pub block_height: BlockHeight,
}

impl CommitteeDecision {
    pub fn is_committed(&self) -> bool {
        self.status == CommitteeStatus::Committed && self.decision.is_some()
    }
}
