//! Core entity: one metachain's validation unit
//!
//! Lifecycle:
//! ```text
//! [UNDEFINED] ──genesis──→ [GENESIS] ──first checkpoint──→ [ACTIVE] ⇄ [CORRUPTED]
//!      │                       │                              │            │
//!      └───────────────────────┴──────────────────────────────┴────────────┴──→ [HALTED]
//! ```
//!
//! HALTED is terminal. Consensus only lets validators log out while the Core
//! is GENESIS or ACTIVE; the Core itself only refuses once it is halted.

use serde::{Deserialize, Serialize};
use shared_types::{Address, ErrorKind};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Lifetime of a Core
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreLifetime {
    #[default]
    Undefined,
    Genesis,
    Active,
    Corrupted,
    Halted,
}

impl CoreLifetime {
    /// Validators may join and log out
    pub fn is_operable(&self) -> bool {
        matches!(self, CoreLifetime::Genesis | CoreLifetime::Active)
    }

    /// Whether `self → next` is an allowed lifetime change
    pub fn can_transition_to(&self, next: CoreLifetime) -> bool {
        use CoreLifetime::*;
        match (*self, next) {
            (Halted, _) => false,
            (_, Halted) => true,
            (Undefined, Genesis) | (Genesis, Active) | (Active, Corrupted) | (Corrupted, Active) => {
                true
            }
            _ => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoreLifetime::Undefined => "undefined",
            CoreLifetime::Genesis => "genesis",
            CoreLifetime::Active => "active",
            CoreLifetime::Corrupted => "corrupted",
            CoreLifetime::Halted => "halted",
        }
    }
}

impl fmt::Display for CoreLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Core errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Core lifetime cannot change from {from} to {to}")]
    InvalidLifetimeTransition { from: CoreLifetime, to: CoreLifetime },

    #[error("Core {core} is halted")]
    CoreHalted { core: Address },

    #[error("Core {core} is {lifetime}; validators may only join while genesis or active")]
    NotOperable { core: Address, lifetime: CoreLifetime },
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidState
    }
}

/// A Core and its validator bookkeeping.
#[derive(Clone, Debug)]
pub struct Core {
    address: Address,
    lifetime: CoreLifetime,
    validators: BTreeSet<Address>,
    logged_out: BTreeSet<Address>,
}

impl Core {
    /// Create a Core in the Undefined lifetime
    pub fn new(address: Address) -> Self {
        Self {
            address,
            lifetime: CoreLifetime::Undefined,
            validators: BTreeSet::new(),
            logged_out: BTreeSet::new(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn lifetime(&self) -> CoreLifetime {
        self.lifetime
    }

    /// Move to `next`. Returns the previous lifetime.
    pub fn set_lifetime(&mut self, next: CoreLifetime) -> Result<CoreLifetime, CoreError> {
        if !self.lifetime.can_transition_to(next) {
            return Err(CoreError::InvalidLifetimeTransition {
                from: self.lifetime,
                to: next,
            });
        }
        let previous = self.lifetime;
        self.lifetime = next;
        Ok(previous)
    }

    /// Add `validator` to the active set. Returns false if it already was.
    pub fn join(&mut self, validator: Address) -> Result<bool, CoreError> {
        if !self.lifetime.is_operable() {
            return Err(CoreError::NotOperable {
                core: self.address,
                lifetime: self.lifetime,
            });
        }
        self.logged_out.remove(&validator);
        Ok(self.validators.insert(validator))
    }

    /// Mark `validator` as logged out.
    ///
    /// Idempotent; returns false when the validator was already logged out.
    pub fn logout(&mut self, validator: Address) -> Result<bool, CoreError> {
        if self.lifetime == CoreLifetime::Halted {
            return Err(CoreError::CoreHalted { core: self.address });
        }
        self.validators.remove(&validator);
        Ok(self.logged_out.insert(validator))
    }

    pub fn is_active(&self, validator: &Address) -> bool {
        self.validators.contains(validator)
    }

    pub fn is_logged_out(&self, validator: &Address) -> bool {
        self.logged_out.contains(validator)
    }

    /// Logged-out validators in address order
    pub fn logged_out(&self) -> Vec<Address> {
        self.logged_out.iter().copied().collect()
    }

    pub fn active_validators(&self) -> Vec<Address> {
        self.validators.iter().copied().collect()
    }
}
