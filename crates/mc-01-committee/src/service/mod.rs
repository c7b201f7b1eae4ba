//! Committee Service
//!
//! Wraps a [`Committee`] behind a single `RwLock` so concurrent callers are
//! serialized per committee, reads the block height from the injected clock,
//! and queues outgoing events for whoever drives the round.

use crate::domain::{
    Committee, CommitteeDecision, CommitteeSetup, CommitteeStatus, PhaseTransition, RevealOutcome,
};
use crate::error::{CommitteeError, CommitteeResult};
use crate::events::{CommitteeEvent, PhaseChangedEvent};
use crate::metrics;
use crate::ports::inbound::{CommitteeApi, CommitteeSnapshot};
use crate::ports::outbound::BlockClock;
use crate::types::CommitteeConfig;
use parking_lot::RwLock;
use shared_types::{Address, BlockHeight, Hash};
use std::sync::Arc;

/// Internal state guarded by the service lock
struct CommitteeServiceState {
    committee: Committee,
    /// Events not yet drained by `take_events`
    pending_events: Vec<CommitteeEvent>,
}

impl CommitteeServiceState {
    fn on_transition(&mut self, transition: PhaseTransition, height: BlockHeight) {
        if let PhaseTransition::Advanced { from, to } = transition {
            let committee = self.committee.address();
            tracing::info!(
                committee = %committee,
                from = from.label(),
                to = to.label(),
                block_height = height,
                "Committee status changed"
            );
            metrics::record_phase_transition(to.label());
            self.pending_events
                .push(CommitteeEvent::PhaseChanged(PhaseChangedEvent::new(
                    committee, from, to, height,
                )));
        }
    }

    fn on_decision(&mut self, decision: &CommitteeDecision) {
        self.on_transition(
            PhaseTransition::Advanced {
                from: CommitteeStatus::RevealPhase,
                to: decision.status,
            },
            decision.block_height,
        );

        if decision.is_committed() {
            tracing::info!(
                committee = %decision.committee,
                votes = decision.votes,
                revealed = decision.revealed,
                "Committee reached a decision"
            );
        } else {
            tracing::warn!(
                committee = %decision.committee,
                revealed = decision.revealed,
                "Committee round ended without a decision"
            );
        }
        metrics::record_decision(decision.status.label());
        self.pending_events
            .push(CommitteeEvent::Decided(decision.clone()));
    }
}

/// Log and count a rejected operation, then hand the result back.
fn observe<T>(operation: &'static str, result: CommitteeResult<T>) -> CommitteeResult<T> {
    if let Err(err) = &result {
        tracing::debug!(operation, kind = %err.kind(), error = %err, "Committee operation rejected");
        metrics::record_rejected(err.kind().as_str());
    }
    result
}

/// Committee service implementation
pub struct CommitteeService<C>
where
    C: BlockClock,
{
    state: RwLock<CommitteeServiceState>,
    clock: Arc<C>,
}

impl<C> CommitteeService<C>
where
    C: BlockClock,
{
    /// Create a committee in the Undefined status
    pub fn new(setup: CommitteeSetup, config: CommitteeConfig, clock: Arc<C>) -> CommitteeResult<Self> {
        let committee = Committee::new(setup, config)?;
        tracing::debug!(
            committee = %committee.address(),
            consensus = %committee.consensus(),
            size = committee.size(),
            "Committee created"
        );
        Ok(Self {
            state: RwLock::new(CommitteeServiceState {
                committee,
                pending_events: Vec::new(),
            }),
            clock,
        })
    }

    pub fn address(&self) -> Address {
        self.state.read().committee.address()
    }

    pub fn proposal(&self) -> Hash {
        self.state.read().committee.proposal()
    }

    /// Members ranked by dislocation distance, closest first
    pub fn members_by_distance(&self) -> Vec<Address> {
        self.state.read().committee.members_by_distance()
    }

    /// Drain queued events
    pub fn take_events(&self) -> Vec<CommitteeEvent> {
        std::mem::take(&mut self.state.write().pending_events)
    }

    fn height(&self) -> BlockHeight {
        self.clock.current_block_height()
    }
}

impl<C> CommitteeApi for CommitteeService<C>
where
    C: BlockClock,
{
    fn enter_member(&self, caller: Address, validator: Address) -> CommitteeResult<()> {
        let mut state = self.state.write();
        if caller != state.committee.consensus() {
            return observe(
                "enter_member",
                Err(CommitteeError::NotConsensus { caller }),
            );
        }
        observe("enter_member", state.committee.enter_member(validator))?;
        tracing::debug!(
            committee = %state.committee.address(),
            validator = %validator,
            members = state.committee.members().len(),
            "Member entered committee"
        );
        Ok(())
    }

    fn cooldown_committee(&self) -> CommitteeResult<PhaseTransition> {
        let mut state = self.state.write();
        let height = self.height();
        let transition = observe(
            "cooldown_committee",
            state.committee.cooldown_committee(height),
        )?;
        state.on_transition(transition, height);
        Ok(transition)
    }

    fn activate_committee(&self) -> CommitteeResult<PhaseTransition> {
        let mut state = self.state.write();
        let height = self.height();
        let transition = observe(
            "activate_committee",
            state.committee.activate_committee(height),
        )?;
        state.on_transition(transition, height);
        Ok(transition)
    }

    fn close_commit_phase(&self) -> CommitteeResult<PhaseTransition> {
        let mut state = self.state.write();
        let height = self.height();
        let transition = observe(
            "close_commit_phase",
            state.committee.close_commit_phase(height),
        )?;
        if !transition.is_advanced() {
            tracing::debug!(
                committee = %state.committee.address(),
                block_height = height,
                commit_timeout = ?state.committee.commit_timeout_block_height(),
                "Commit phase still open"
            );
            metrics::record_noop_poke();
        }
        state.on_transition(transition, height);
        Ok(transition)
    }

    fn submit_commit(&self, validator: Address, sealed_vote: Hash) -> CommitteeResult<()> {
        let mut state = self.state.write();
        observe(
            "submit_commit",
            state.committee.submit_commit(validator, sealed_vote),
        )?;
        tracing::debug!(
            committee = %state.committee.address(),
            validator = %validator,
            commits = state.committee.commit_count(),
            "Sealed vote committed"
        );
        Ok(())
    }

    fn reveal_vote(
        &self,
        validator: Address,
        vote: Hash,
        salt: Hash,
    ) -> CommitteeResult<RevealOutcome> {
        let mut state = self.state.write();
        let height = self.height();
        let outcome = observe(
            "reveal_vote",
            state.committee.reveal_vote(validator, vote, salt, height),
        )?;
        tracing::debug!(
            committee = %state.committee.address(),
            validator = %validator,
            reveals = state.committee.reveal_count(),
            "Vote revealed"
        );
        if let RevealOutcome::Finalized(decision) = &outcome {
            state.on_decision(decision);
        }
        Ok(outcome)
    }

    fn finalize(&self) -> CommitteeResult<CommitteeDecision> {
        let mut state = self.state.write();
        let height = self.height();
        let decision = observe("finalize", state.committee.finalize(height))?;
        state.on_decision(&decision);
        Ok(decision)
    }

    fn status(&self) -> CommitteeStatus {
        self.state.read().committee.status()
    }

    fn decision(&self) -> Option<CommitteeDecision> {
        self.state.read().committee.decision().cloned()
    }

    fn snapshot(&self) -> CommitteeSnapshot {
        let state = self.state.read();
        let committee = &state.committee;
        CommitteeSnapshot {
            address: committee.address(),
            consensus: committee.consensus(),
            proposal: committee.proposal(),
            size: committee.size(),
            status: committee.status(),
            members: committee.members().iter().copied().collect(),
            activation_block_height: committee.activation_block_height(),
            commit_timeout_block_height: committee.commit_timeout_block_height(),
            reveal_timeout_block_height: committee.reveal_timeout_block_height(),
            commits: committee.commit_count(),
            reveals: committee.reveal_count(),
        }
    }
}
