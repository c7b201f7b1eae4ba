//! In-process Core
//!
//! Wraps the [`Core`] entity behind a lock so Consensus and validators can
//! share it.

use crate::domain::{Core, CoreError, CoreLifetime};
use crate::ports::outbound::CoreGateway;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::Address;

/// `CoreGateway` backed by a local [`Core`].
#[derive(Debug)]
pub struct LocalCore {
    address: Address,
    core: RwLock<Core>,
}

impl LocalCore {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            core: RwLock::new(Core::new(address)),
        }
    }

    /// Core already moved through `path`, for setups that start mid-life
    pub fn with_lifetime_path(address: Address, path: &[CoreLifetime]) -> Result<Self, CoreError> {
        let mut core = Core::new(address);
        for step in path {
            core.set_lifetime(*step)?;
        }
        Ok(Self {
            address,
            core: RwLock::new(core),
        })
    }

    /// Add `validator` to the active set
    pub fn join(&self, validator: Address) -> Result<bool, CoreError> {
        self.core.write().join(validator)
    }

    pub fn is_active(&self, validator: &Address) -> bool {
        self.core.read().is_active(validator)
    }

    pub fn is_logged_out(&self, validator: &Address) -> bool {
        self.core.read().is_logged_out(validator)
    }

    pub fn logged_out(&self) -> Vec<Address> {
        self.core.read().logged_out()
    }

    pub fn current_lifetime(&self) -> CoreLifetime {
        self.core.read().lifetime()
    }
}

#[async_trait]
impl CoreGateway for LocalCore {
    fn address(&self) -> Address {
        self.address
    }

    async fn logout(&self, validator: Address) -> Result<(), CoreError> {
        let newly = self.core.write().logout(validator)?;
        if newly {
            tracing::debug!(core = %self.address, validator = %validator, "Validator logged out of core");
        }
        Ok(())
    }

    async fn lifetime(&self) -> CoreLifetime {
        self.current_lifetime()
    }

    async fn set_lifetime(&self, lifetime: CoreLifetime) -> Result<(), CoreError> {
        let previous = self.core.write().set_lifetime(lifetime)?;
        tracing::info!(
            core = %self.address,
            from = previous.label(),
            to = lifetime.label(),
            "Core lifetime changed"
        );
        Ok(())
    }
}
