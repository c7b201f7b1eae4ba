//! In-memory reputation ledger

use crate::ports::outbound::ReputationLedger;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::Address;
use std::collections::HashMap;

/// Reputation of one validator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReputationEntry {
    pub score: u64,
    pub logged_out: bool,
}

/// `ReputationLedger` keeping scores in memory.
#[derive(Debug, Default)]
pub struct InMemoryReputation {
    entries: RwLock<HashMap<Address, ReputationEntry>>,
}

impl InMemoryReputation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score of `validator`
    pub fn set_score(&self, validator: Address, score: u64) {
        self.entries.write().entry(validator).or_default().score = score;
    }

    pub fn entry(&self, validator: &Address) -> Option<ReputationEntry> {
        self.entries.read().get(validator).copied()
    }

    pub fn is_logged_out(&self, validator: &Address) -> bool {
        self.entry(validator)
            .map(|entry| entry.logged_out)
            .unwrap_or(false)
    }
}

#[async_trait]
impl ReputationLedger for InMemoryReputation {
    async fn logout(&self, validator: Address) -> Result<(), String> {
        if validator.is_zero() {
            return Err("Validator address is 0".to_string());
        }
        self.entries.write().entry(validator).or_default().logged_out = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_keeps_score() {
        let ledger = InMemoryReputation::new();
        let validator = Address::repeat_byte(3);
        ledger.set_score(validator, 42);

        ledger.logout(validator).await.unwrap();
        ledger.logout(validator).await.unwrap();

        assert_eq!(
            ledger.entry(&validator),
            Some(ReputationEntry {
                score: 42,
                logged_out: true
            })
        );
    }

    #[tokio::test]
    async fn test_zero_validator_rejected() {
        let ledger = InMemoryReputation::new();
        assert!(ledger.logout(Address::ZERO).await.is_err());
        assert!(!ledger.is_logged_out(&Address::ZERO));
    }
}
