//! # mc-02-consensus
//!
//! Registry of metachains, the Core serving each of them, and the lifetime of
//! every Core. Orchestrates validator logout across the Core and the
//! reputation ledger, and accepts committee decisions.
//!
//! ## Architecture
//!
//! ```text
//!                       ┌──────────── logout ────────────┐
//!                       │                                ↓
//! validator ──→ Consensus (2) ──1. logout──→ Core    2. logout──→ Reputation
//!                   ↑
//! Committee (1) ────┘ CommitteeDecision (first committed checkpoint: GENESIS → ACTIVE)
//! ```
//!
//! ## Logout Checks
//!
//! | Order | Check | Error | Kind |
//! |-------|-------|-------|------|
//! | 1 | metachain id is not zero | `InvalidMetachainId` | InvalidArgument |
//! | 2 | Core address is not zero | `InvalidCoreAddress` | InvalidArgument |
//! | 3 | Core is assigned to the metachain | `CoreNotAssigned` | Unauthorized |
//! | 4 | Core lifetime is genesis or active | `InvalidCoreLifetime` | Unauthorized |
//!
//! After the checks the Core is called first and the reputation ledger
//! second. A failure in the second call does not undo the first.
//!
//! ## Committee Decisions
//!
//! One committee decides each proposal. Once a proposal's round is recorded
//! as invalid, a new committee may be registered to rerun it. A committed
//! proposal is final. When the first checkpoint promotes a Genesis Core,
//! the Core is updated before the decision is recorded, so a refused
//! promotion leaves Consensus unchanged.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mc_02_consensus::{ConsensusApi, ConsensusService, InMemoryReputation, LocalCore};
//!
//! let consensus = ConsensusService::with_reputation(Arc::new(InMemoryReputation::new()));
//! consensus.set_assignment(metachain_id, Arc::new(LocalCore::new(core)))?;
//! consensus.set_core_lifetime(core, CoreLifetime::Genesis)?;
//!
//! consensus.logout(metachain_id, core, validator).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryReputation, LocalCore, ReputationEntry};
pub use domain::{
    CommitteeRegistration, Core, CoreError, CoreLifetime, DecisionEffect, Registry,
};
pub use error::{ConsensusError, ConsensusResult};
pub use ports::inbound::ConsensusApi;
pub use ports::outbound::{CoreGateway, ReputationLedger};
pub use service::ConsensusService;
