//! Consensus Service
//!
//! Owns the registry behind a `RwLock`. Calls out to Cores and the reputation
//! ledger only after the lock has been released: the registry is read and
//! checked first, the collaborators are cloned out, and the guard is dropped
//! before the first `.await`.

use crate::domain::{CoreLifetime, DecisionEffect, Registry};
use crate::error::{ConsensusError, ConsensusResult};
use crate::metrics;
use crate::ports::inbound::ConsensusApi;
use crate::ports::outbound::{CoreGateway, ReputationLedger};
use async_trait::async_trait;
use mc_01_committee::CommitteeDecision;
use parking_lot::RwLock;
use shared_types::{Address, Hash, MetachainId};
use std::collections::HashMap;
use std::sync::Arc;

/// Internal state guarded by the service lock
#[derive(Default)]
struct ConsensusServiceState {
    registry: Registry,
    /// Gateways of the Cores currently serving a metachain, by address
    cores: HashMap<Address, Arc<dyn CoreGateway>>,
    reputation: Option<Arc<dyn ReputationLedger>>,
}

/// Consensus service implementation
#[derive(Default)]
pub struct ConsensusService {
    state: RwLock<ConsensusServiceState>,
}

impl ConsensusService {
    /// Create an empty registry without a reputation ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reputation(reputation: Arc<dyn ReputationLedger>) -> Self {
        let service = Self::new();
        service.set_reputation(reputation);
        service
    }

    /// Gateway of a known Core
    pub fn core(&self, core: &Address) -> Option<Arc<dyn CoreGateway>> {
        self.state.read().cores.get(core).cloned()
    }

    /// Check the logout preconditions and clone out the collaborators.
    fn prepare_logout(
        &self,
        metachain_id: &MetachainId,
        core: &Address,
    ) -> ConsensusResult<(Arc<dyn CoreGateway>, Arc<dyn ReputationLedger>)> {
        let state = self.state.read();
        state.registry.authorize_logout(metachain_id, core)?;
        let gateway = state
            .cores
            .get(core)
            .cloned()
            .ok_or(ConsensusError::CoreNotAssigned {
                metachain_id: *metachain_id,
                core: *core,
            })?;
        let reputation = state
            .reputation
            .clone()
            .ok_or(ConsensusError::ReputationNotSet)?;
        Ok((gateway, reputation))
    }

    async fn forward_logout(
        gateway: Arc<dyn CoreGateway>,
        reputation: Arc<dyn ReputationLedger>,
        validator: Address,
    ) -> ConsensusResult<()> {
        gateway.logout(validator).await?;
        reputation
            .logout(validator)
            .await
            .map_err(|reason| ConsensusError::Reputation { reason })
    }
}

#[async_trait]
impl ConsensusApi for ConsensusService {
    fn set_assignment(
        &self,
        metachain_id: MetachainId,
        core: Arc<dyn CoreGateway>,
    ) -> ConsensusResult<Option<Address>> {
        let address = core.address();
        let mut state = self.state.write();
        let previous = state.registry.assign(metachain_id, address)?;
        state.cores.insert(address, core);
        if let Some(replaced) = previous.filter(|replaced| *replaced != address) {
            if !state.registry.serves_any(&replaced) {
                state.cores.remove(&replaced);
            }
        }

        tracing::info!(
            metachain_id = %metachain_id,
            core = %address,
            previous = ?previous,
            "Core assigned to metachain"
        );
        Ok(previous)
    }

    fn set_core_lifetime(&self, core: Address, lifetime: CoreLifetime) -> ConsensusResult<()> {
        let previous = self.state.write().registry.set_core_lifetime(core, lifetime)?;
        tracing::info!(
            core = %core,
            from = previous.label(),
            to = lifetime.label(),
            "Core lifetime recorded"
        );
        Ok(())
    }

    fn set_reputation(&self, reputation: Arc<dyn ReputationLedger>) {
        self.state.write().reputation = Some(reputation);
        tracing::debug!("Reputation ledger set");
    }

    fn assigned_core(&self, metachain_id: &MetachainId) -> Option<Address> {
        self.state.read().registry.assigned_core(metachain_id)
    }

    fn core_lifetime(&self, core: &Address) -> CoreLifetime {
        self.state.read().registry.core_lifetime(core)
    }

    async fn logout(
        &self,
        metachain_id: MetachainId,
        core: Address,
        validator: Address,
    ) -> ConsensusResult<()> {
        let result = match self.prepare_logout(&metachain_id, &core) {
            Ok((gateway, reputation)) => {
                Self::forward_logout(gateway, reputation, validator).await
            }
            Err(err) => Err(err),
        };

        match &result {
            Ok(()) => {
                tracing::info!(
                    metachain_id = %metachain_id,
                    core = %core,
                    validator = %validator,
                    "Validator logged out"
                );
                metrics::record_logout("success");
            }
            Err(err) => {
                tracing::warn!(
                    metachain_id = %metachain_id,
                    core = %core,
                    validator = %validator,
                    kind = %err.kind(),
                    error = %err,
                    "Logout rejected"
                );
                metrics::record_logout(err.kind().as_str());
            }
        }
        result
    }

    fn register_committee(
        &self,
        metachain_id: MetachainId,
        proposal: Hash,
        committee: Address,
    ) -> ConsensusResult<()> {
        self.state
            .write()
            .registry
            .register_committee(metachain_id, proposal, committee)?;
        tracing::debug!(
            metachain_id = %metachain_id,
            committee = %committee,
            "Committee registered for proposal"
        );
        Ok(())
    }

    async fn register_committee_decision(
        &self,
        decision: CommitteeDecision,
    ) -> ConsensusResult<()> {
        let checked = {
            let state = self.state.read();
            state.registry.check_decision(&decision).map(|effect| match effect {
                DecisionEffect::CorePromoted { core } => state.cores.get(&core).cloned(),
                DecisionEffect::Recorded => None,
            })
        };
        let gateway = checked.map_err(|err| {
            tracing::warn!(
                committee = %decision.committee,
                error = %err,
                "Committee decision rejected"
            );
            err
        })?;

        // Promote the Core before recording; a failed push leaves the registry untouched.
        if let Some(gateway) = gateway {
            if gateway.lifetime().await == CoreLifetime::Genesis {
                if let Err(err) = gateway.set_lifetime(CoreLifetime::Active).await {
                    tracing::warn!(
                        committee = %decision.committee,
                        core = %gateway.address(),
                        error = %err,
                        "Core promotion failed; decision not recorded"
                    );
                    return Err(err.into());
                }
            }
        }

        let effect = self.state.write().registry.register_decision(&decision)?;

        tracing::info!(
            committee = %decision.committee,
            status = decision.status.label(),
            revealed = decision.revealed,
            "Committee decision registered"
        );
        metrics::record_decision(decision.status.label());

        if let DecisionEffect::CorePromoted { core } = effect {
            tracing::info!(core = %core, "Core promoted to active after first checkpoint");
            metrics::record_core_promotion();
        }
        Ok(())
    }

    fn committee_decision(&self, proposal: &Hash) -> Option<CommitteeDecision> {
        self.state.read().registry.decision(proposal).cloned()
    }
}
