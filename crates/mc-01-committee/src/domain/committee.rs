//! Committee entity: one commit-reveal round over one proposal
//!
//! State Machine:
//! ```text
//! [UNDEFINED] ──cooldown (quorum entered)──→ [COOLDOWN]
//!                                                │
//!                          block ≥ activation ───┘
//!                                                ↓
//!                                         [COMMIT PHASE] ──close (block < timeout)──→ no-op
//!                                                │
//!                          block ≥ commit timeout┘
//!                                                ↓
//!                                         [REVEAL PHASE]
//!                                                │
//!          all committed revealed or block ≥ reveal timeout
//!                                                ↓
//!                              majority ──→ [COMMITTED]     otherwise ──→ [INVALID]
//! ```
//!
//! Every operation checks all of its preconditions before touching state, so a
//! rejected call leaves the committee exactly as it was.

use super::decision::CommitteeDecision;
use super::member_list::MemberList;
use super::quorum::majority;
use super::seal::verify_seal;
use super::tally::{TallyOutcome, VoteTally};
use crate::error::{CommitteeError, CommitteeResult};
use crate::types::CommitteeConfig;
use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight, Hash};
use std::collections::HashMap;
use std::fmt;

/// Committee status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommitteeStatus {
    /// Members may enter
    #[default]
    Undefined,
    /// Membership frozen, waiting for the activation height
    Cooldown,
    /// Members submit sealed votes
    CommitPhase,
    /// Members open their sealed votes
    RevealPhase,
    /// A vote won a strict majority
    Committed,
    /// The round produced no decision
    Invalid,
}

impl CommitteeStatus {
    /// Committed and Invalid accept no further operations.
    pub fn is_final(&self) -> bool {
        matches!(self, CommitteeStatus::Committed | CommitteeStatus::Invalid)
    }

    /// Snake-case label for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            CommitteeStatus::Undefined => "undefined",
            CommitteeStatus::Cooldown => "cooldown",
            CommitteeStatus::CommitPhase => "commit_phase",
            CommitteeStatus::RevealPhase => "reveal_phase",
            CommitteeStatus::Committed => "committed",
            CommitteeStatus::Invalid => "invalid",
        }
    }
}

impl fmt::Display for CommitteeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommitteeStatus::Undefined => "undefined state",
            CommitteeStatus::Cooldown => "cooldown",
            CommitteeStatus::CommitPhase => "commit phase",
            CommitteeStatus::RevealPhase => "reveal phase",
            CommitteeStatus::Committed => "committed state",
            CommitteeStatus::Invalid => "invalid state",
        };
        f.write_str(label)
    }
}

/// Result of a guarded phase transition that was not rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseTransition {
    /// Guard not yet open; nothing changed
    Unchanged(CommitteeStatus),
    /// Status moved from `from` to `to`
    Advanced {
        from: CommitteeStatus,
        to: CommitteeStatus,
    },
}

impl PhaseTransition {
    pub fn is_advanced(&self) -> bool {
        matches!(self, PhaseTransition::Advanced { .. })
    }
}

/// Result of an accepted reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Reveal stored; the round is still open
    Recorded { revealed: usize, committed: usize },
    /// The reveal completed the round and it was finalized on the spot
    Finalized(CommitteeDecision),
}

/// Parameters fixed at committee creation.
#[derive(Clone, Debug)]
pub struct CommitteeSetup {
    /// Identity of this committee
    pub address: Address,
    /// Consensus that owns this committee
    pub consensus: Address,
    /// Number of seats
    pub size: usize,
    /// Seed ordering members by distance
    pub dislocation: Hash,
    /// Checkpoint hash under vote
    pub proposal: Hash,
}

/// A commit-reveal committee.
#[derive(Clone, Debug)]
pub struct Committee {
    address: Address,
    consensus: Address,
    size: usize,
    dislocation: Hash,
    proposal: Hash,
    config: CommitteeConfig,
    members: MemberList,
    status: CommitteeStatus,
    activation_block_height: Option<BlockHeight>,
    commit_timeout_block_height: Option<BlockHeight>,
    reveal_timeout_block_height: Option<BlockHeight>,
    commits: HashMap<Address, Hash>,
    reveals: HashMap<Address, Hash>,
    decision: Option<CommitteeDecision>,
}

impl Committee {
    /// Create a committee in the Undefined status
    pub fn new(setup: CommitteeSetup, config: CommitteeConfig) -> CommitteeResult<Self> {
        if setup.size == 0 {
            return Err(CommitteeError::InvalidSize);
        }
        if setup.consensus.is_zero() {
            return Err(CommitteeError::InvalidConsensusAddress);
        }
        config.validate()?;

        Ok(Self {
            address: setup.address,
            consensus: setup.consensus,
            size: setup.size,
            dislocation: setup.dislocation,
            proposal: setup.proposal,
            config,
            members: MemberList::with_capacity(setup.size),
            status: CommitteeStatus::Undefined,
            activation_block_height: None,
            commit_timeout_block_height: None,
            reveal_timeout_block_height: None,
            commits: HashMap::new(),
            reveals: HashMap::new(),
            decision: None,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn consensus(&self) -> Address {
        self.consensus
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dislocation(&self) -> Hash {
        self.dislocation
    }

    pub fn proposal(&self) -> Hash {
        self.proposal
    }

    pub fn config(&self) -> &CommitteeConfig {
        &self.config
    }

    pub fn status(&self) -> CommitteeStatus {
        self.status
    }

    pub fn members(&self) -> &MemberList {
        &self.members
    }

    pub fn activation_block_height(&self) -> Option<BlockHeight> {
        self.activation_block_height
    }

    pub fn commit_timeout_block_height(&self) -> Option<BlockHeight> {
        self.commit_timeout_block_height
    }

    /// Set only once the committee reached the reveal phase
    pub fn reveal_timeout_block_height(&self) -> Option<BlockHeight> {
        self.reveal_timeout_block_height
    }

    pub fn decision(&self) -> Option<&CommitteeDecision> {
        self.decision.as_ref()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    pub fn reveal_count(&self) -> usize {
        self.reveals.len()
    }

    pub fn has_committed(&self, validator: &Address) -> bool {
        self.commits.contains_key(validator)
    }

    pub fn has_revealed(&self, validator: &Address) -> bool {
        self.reveals.contains_key(validator)
    }

    /// Members needed before cooldown
    pub fn quorum(&self) -> usize {
        self.config.quorum_policy.required_members(self.size)
    }

    /// Reveals needed for the tally to decide anything
    pub fn reveal_quorum(&self) -> usize {
        majority(self.size)
    }

    /// Members ranked by dislocation distance to the proposal, closest first
    pub fn members_by_distance(&self) -> Vec<Address> {
        self.members.ranked_by_distance(&self.dislocation, &self.proposal)
    }

    /// Every member that committed has also revealed
    pub fn all_committed_revealed(&self) -> bool {
        !self.commits.is_empty() && self.reveals.len() == self.commits.len()
    }

    fn ensure_status(&self, expected: CommitteeStatus) -> CommitteeResult<()> {
        if self.status != expected {
            return Err(CommitteeError::InvalidState {
                expected,
                actual: self.status,
            });
        }
        Ok(())
    }

    fn ensure_member(&self, validator: &Address) -> CommitteeResult<()> {
        if !self.members.contains(validator) {
            return Err(CommitteeError::NotAMember {
                validator: *validator,
            });
        }
        Ok(())
    }

    /// Enter `validator` into the committee
    pub fn enter_member(&mut self, validator: Address) -> CommitteeResult<()> {
        self.ensure_status(CommitteeStatus::Undefined)?;
        if validator.is_zero() {
            return Err(CommitteeError::InvalidValidatorAddress);
        }
        if self.members.contains(&validator) {
            return Err(CommitteeError::DuplicateMember { validator });
        }
        if self.members.len() >= self.size {
            return Err(CommitteeError::CommitteeFull { size: self.size });
        }

        self.members.insert(validator);
        Ok(())
    }

    /// Freeze membership and schedule activation
    pub fn cooldown_committee(&mut self, current: BlockHeight) -> CommitteeResult<PhaseTransition> {
        self.ensure_status(CommitteeStatus::Undefined)?;
        let need = self.quorum();
        if self.members.len() < need {
            return Err(CommitteeError::NotEnoughMembers {
                have: self.members.len(),
                need,
            });
        }

        self.activation_block_height = Some(current.saturating_add(self.config.activation_delay));
        Ok(self.advance(CommitteeStatus::Cooldown))
    }

    /// Open the commit phase once the activation height is reached
    pub fn activate_committee(&mut self, current: BlockHeight) -> CommitteeResult<PhaseTransition> {
        self.ensure_status(CommitteeStatus::Cooldown)?;
        let required = self.activation_block_height.unwrap_or(current);
        if current < required {
            return Err(CommitteeError::TooEarly { current, required });
        }

        self.commit_timeout_block_height =
            Some(current.saturating_add(self.config.commit_phase_timeout));
        Ok(self.advance(CommitteeStatus::CommitPhase))
    }

    /// Close the commit phase if its timeout has been reached.
    ///
    /// Before the timeout this is a no-op that reports `Unchanged`, so anyone
    /// may poke it repeatedly.
    pub fn close_commit_phase(&mut self, current: BlockHeight) -> CommitteeResult<PhaseTransition> {
        self.ensure_status(CommitteeStatus::CommitPhase)?;
        let timeout = self.commit_timeout_block_height.unwrap_or(current);
        if current < timeout {
            return Ok(PhaseTransition::Unchanged(self.status));
        }

        self.reveal_timeout_block_height =
            Some(current.saturating_add(self.config.reveal_phase_timeout));
        Ok(self.advance(CommitteeStatus::RevealPhase))
    }

    /// Store the sealed vote of a member
    pub fn submit_commit(&mut self, validator: Address, sealed_vote: Hash) -> CommitteeResult<()> {
        self.ensure_status(CommitteeStatus::CommitPhase)?;
        self.ensure_member(&validator)?;
        if self.commits.contains_key(&validator) {
            return Err(CommitteeError::DuplicateCommit { validator });
        }

        self.commits.insert(validator, sealed_vote);
        Ok(())
    }

    /// Open a member's sealed vote
    pub fn reveal_vote(
        &mut self,
        validator: Address,
        vote: Hash,
        salt: Hash,
        current: BlockHeight,
    ) -> CommitteeResult<RevealOutcome> {
        self.ensure_status(CommitteeStatus::RevealPhase)?;
        let deadline = self.reveal_timeout_block_height.unwrap_or(current);
        if current >= deadline {
            return Err(CommitteeError::RevealWindowClosed { current, deadline });
        }
        self.ensure_member(&validator)?;
        let sealed = self
            .commits
            .get(&validator)
            .ok_or(CommitteeError::NotCommitted { validator })?;
        if self.reveals.contains_key(&validator) {
            return Err(CommitteeError::DuplicateReveal { validator });
        }
        if !verify_seal(sealed, &vote, &salt) {
            return Err(CommitteeError::CommitMismatch { validator });
        }

        self.reveals.insert(validator, vote);

        if self.config.finalize_on_full_reveal && self.all_committed_revealed() {
            return Ok(RevealOutcome::Finalized(self.tally(current)));
        }
        Ok(RevealOutcome::Recorded {
            revealed: self.reveals.len(),
            committed: self.commits.len(),
        })
    }

    /// Tally the reveals and leave the reveal phase.
    ///
    /// Allowed once every committed member revealed, or once the reveal
    /// timeout has passed.
    pub fn finalize(&mut self, current: BlockHeight) -> CommitteeResult<CommitteeDecision> {
        self.ensure_status(CommitteeStatus::RevealPhase)?;
        let deadline = self.reveal_timeout_block_height.unwrap_or(current);
        if !self.all_committed_revealed() && current < deadline {
            return Err(CommitteeError::TooEarly {
                current,
                required: deadline,
            });
        }

        Ok(self.tally(current))
    }

    fn tally(&mut self, current: BlockHeight) -> CommitteeDecision {
        let tally: VoteTally = self.reveals.values().copied().collect();
        let outcome = tally.outcome(self.reveal_quorum());

        let (status, votes) = match outcome {
            TallyOutcome::Decided { votes, .. } => (CommitteeStatus::Committed, votes),
            TallyOutcome::NoMajority { .. } | TallyOutcome::InsufficientReveals { .. } => {
                (CommitteeStatus::Invalid, 0)
            }
        };

        let revealers = self
            .members_by_distance()
            .into_iter()
            .filter(|member| self.reveals.contains_key(member))
            .collect();

        let decision = CommitteeDecision {
            committee: self.address,
            proposal: self.proposal,
            status,
            decision: outcome.decision(),
            votes,
            revealed: tally.revealed(),
            revealers,
            block_height: current,
        };

        self.advance(status);
        self.decision = Some(decision.clone());
        decision
    }

    fn advance(&mut self, to: CommitteeStatus) -> PhaseTransition {
        let from = self.status;
        self.status = to;
        PhaseTransition::Advanced { from, to }
    }
}
