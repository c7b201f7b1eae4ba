//! Driving Ports (API - Inbound)

use super::outbound::{CoreGateway, ReputationLedger};
use crate::domain::CoreLifetime;
use crate::error::ConsensusResult;
use async_trait::async_trait;
use mc_01_committee::CommitteeDecision;
use shared_types::{Address, Hash, MetachainId};
use std::sync::Arc;

/// Primary Consensus API
#[async_trait]
pub trait ConsensusApi: Send + Sync {
    /// Assign `core` to `metachain_id`, replacing any previous Core.
    /// Returns the address of the replaced Core.
    fn set_assignment(
        &self,
        metachain_id: MetachainId,
        core: Arc<dyn CoreGateway>,
    ) -> ConsensusResult<Option<Address>>;

    /// Record the authoritative lifetime of a Core
    fn set_core_lifetime(&self, core: Address, lifetime: CoreLifetime) -> ConsensusResult<()>;

    /// Replace the reputation ledger
    fn set_reputation(&self, reputation: Arc<dyn ReputationLedger>);

    fn assigned_core(&self, metachain_id: &MetachainId) -> Option<Address>;

    fn core_lifetime(&self, core: &Address) -> CoreLifetime;

    /// Log `validator` out of `core`, then out of the reputation ledger.
    ///
    /// Rejected unless `core` is the Core assigned to `metachain_id` and
    /// its lifetime is Genesis or Active.
    async fn logout(
        &self,
        metachain_id: MetachainId,
        core: Address,
        validator: Address,
    ) -> ConsensusResult<()>;

    /// Record which committee decides `proposal` for `metachain_id`.
    ///
    /// A proposal whose recorded round is invalid may be handed to a new
    /// committee; a committed or still undecided one may not.
    fn register_committee(
        &self,
        metachain_id: MetachainId,
        proposal: Hash,
        committee: Address,
    ) -> ConsensusResult<()>;

    /// Accept the decision of a registered committee.
    ///
    /// On a first checkpoint the Core is promoted before the decision is
    /// recorded. If the Core refuses, nothing is recorded and the decision
    /// can be submitted again.
    async fn register_committee_decision(&self, decision: CommitteeDecision)
        -> ConsensusResult<()>;

    fn committee_decision(&self, proposal: &Hash) -> Option<CommitteeDecision>;
}
