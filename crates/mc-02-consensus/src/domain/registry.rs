//! Consensus registry
//!
//! Pure bookkeeping behind the Consensus service: which Core serves each
//! metachain, the authoritative lifetime of every Core, and which committee
//! decides each proposal. Collaborators are never called from here.

use super::core::CoreLifetime;
use crate::error::{ConsensusError, ConsensusResult};
use mc_01_committee::CommitteeDecision;
use shared_types::{Address, Hash, MetachainId};
use std::collections::HashMap;

/// Committee registered to decide one proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitteeRegistration {
    pub metachain_id: MetachainId,
    pub committee: Address,
}

/// What accepting a decision changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionEffect {
    /// Recorded; lifetimes untouched
    Recorded,
    /// First successful checkpoint: the Core moved Genesis → Active
    CorePromoted { core: Address },
}

/// Metachain → Core assignments and Core lifetimes.
#[derive(Debug, Default)]
pub struct Registry {
    assignments: HashMap<MetachainId, Address>,
    core_lifetime: HashMap<Address, CoreLifetime>,
    committees: HashMap<Hash, CommitteeRegistration>,
    decisions: HashMap<Hash, CommitteeDecision>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `core` to `metachain_id`, replacing any previous Core.
    /// Returns the replaced Core.
    pub fn assign(
        &mut self,
        metachain_id: MetachainId,
        core: Address,
    ) -> ConsensusResult<Option<Address>> {
        if metachain_id.is_zero() {
            return Err(ConsensusError::InvalidMetachainId);
        }
        if core.is_zero() {
            return Err(ConsensusError::InvalidCoreAddress);
        }
        Ok(self.assignments.insert(metachain_id, core))
    }

    pub fn assigned_core(&self, metachain_id: &MetachainId) -> Option<Address> {
        self.assignments.get(metachain_id).copied()
    }

    /// Whether `core` serves any metachain
    pub fn serves_any(&self, core: &Address) -> bool {
        self.assignments.values().any(|assigned| assigned == core)
    }

    /// Record `lifetime` for `core`. Returns the previous lifetime.
    pub fn set_core_lifetime(
        &mut self,
        core: Address,
        lifetime: CoreLifetime,
    ) -> ConsensusResult<CoreLifetime> {
        if core.is_zero() {
            return Err(ConsensusError::InvalidCoreAddress);
        }
        Ok(self
            .core_lifetime
            .insert(core, lifetime)
            .unwrap_or_default())
    }

    /// Lifetime on record; Undefined for unknown Cores
    pub fn core_lifetime(&self, core: &Address) -> CoreLifetime {
        self.core_lifetime.get(core).copied().unwrap_or_default()
    }

    /// Run the logout checks in order, returning the lifetime that passed.
    ///
    /// 1. metachain id is not zero
    /// 2. Core address is not zero
    /// 3. Core is the one assigned to the metachain
    /// 4. Core lifetime is Genesis or Active
    pub fn authorize_logout(
        &self,
        metachain_id: &MetachainId,
        core: &Address,
    ) -> ConsensusResult<CoreLifetime> {
        if metachain_id.is_zero() {
            return Err(ConsensusError::InvalidMetachainId);
        }
        if core.is_zero() {
            return Err(ConsensusError::InvalidCoreAddress);
        }
        if self.assigned_core(metachain_id) != Some(*core) {
            return Err(ConsensusError::CoreNotAssigned {
                metachain_id: *metachain_id,
                core: *core,
            });
        }
        let lifetime = self.core_lifetime(core);
        if !lifetime.is_operable() {
            return Err(ConsensusError::InvalidCoreLifetime {
                core: *core,
                lifetime,
            });
        }
        Ok(lifetime)
    }

    /// Record which committee decides `proposal`
    pub fn register_committee(
        &mut self,
        metachain_id: MetachainId,
        proposal: Hash,
        committee: Address,
    ) -> ConsensusResult<()> {
        if metachain_id.is_zero() {
            return Err(ConsensusError::InvalidMetachainId);
        }
        if committee.is_zero() {
            return Err(ConsensusError::InvalidCommitteeAddress);
        }
        if self.committees.contains_key(&proposal) {
            // A round recorded as invalid may be rerun by a new committee.
            match self.decisions.get(&proposal) {
                Some(decided) if !decided.is_committed() => {
                    self.decisions.remove(&proposal);
                }
                _ => return Err(ConsensusError::CommitteeAlreadyRegistered { proposal }),
            }
        }
        self.committees.insert(
            proposal,
            CommitteeRegistration {
                metachain_id,
                committee,
            },
        );
        Ok(())
    }

    pub fn committee_for(&self, proposal: &Hash) -> Option<CommitteeRegistration> {
        self.committees.get(proposal).copied()
    }

    /// Validate a finished committee round and report what accepting it
    /// would change, without changing anything.
    pub fn check_decision(
        &self,
        decision: &CommitteeDecision,
    ) -> ConsensusResult<DecisionEffect> {
        let registration = self
            .committees
            .get(&decision.proposal)
            .copied()
            .filter(|registration| registration.committee == decision.committee)
            .ok_or(ConsensusError::CommitteeNotRegistered {
                committee: decision.committee,
                proposal: decision.proposal,
            })?;
        if self.decisions.contains_key(&decision.proposal) {
            return Err(ConsensusError::DecisionAlreadyRegistered {
                proposal: decision.proposal,
            });
        }
        if !decision.is_committed() {
            return Ok(DecisionEffect::Recorded);
        }
        match self.assigned_core(&registration.metachain_id) {
            Some(core) if self.core_lifetime(&core) == CoreLifetime::Genesis => {
                Ok(DecisionEffect::CorePromoted { core })
            }
            _ => Ok(DecisionEffect::Recorded),
        }
    }

    /// Accept a finished committee round.
    ///
    /// A committed decision on a metachain whose Core is still Genesis
    /// promotes that Core to Active.
    pub fn register_decision(
        &mut self,
        decision: &CommitteeDecision,
    ) -> ConsensusResult<DecisionEffect> {
        let effect = self.check_decision(decision)?;
        self.decisions.insert(decision.proposal, decision.clone());
        if let DecisionEffect::CorePromoted { core } = effect {
            self.core_lifetime.insert(core, CoreLifetime::Active);
        }
        Ok(effect)
    }

    pub fn decision(&self, proposal: &Hash) -> Option<&CommitteeDecision> {
        self.decisions.get(proposal)
    }
}
