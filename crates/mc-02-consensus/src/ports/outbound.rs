//! Driven Ports (SPI - Outbound Dependencies)
//!
//! Consensus forwards validator logouts to the assigned Core and then to the
//! reputation ledger. Neither call is made while the registry lock is held.

use crate::domain::{CoreError, CoreLifetime};
use async_trait::async_trait;
use shared_types::Address;

/// A Core as seen from Consensus
#[async_trait]
pub trait CoreGateway: Send + Sync {
    /// Identity of the Core
    fn address(&self) -> Address;

    /// Log `validator` out of the Core
    async fn logout(&self, validator: Address) -> Result<(), CoreError>;

    /// Lifetime the Core itself reports
    async fn lifetime(&self) -> CoreLifetime;

    /// Move the Core to `lifetime`
    async fn set_lifetime(&self, lifetime: CoreLifetime) -> Result<(), CoreError>;
}

/// Validator reputation ledger
#[async_trait]
pub trait ReputationLedger: Send + Sync {
    /// Record that `validator` logged out
    async fn logout(&self, validator: Address) -> Result<(), String>;
}
