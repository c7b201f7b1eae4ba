//! # Error Kinds
//!
//! Coarse classification shared by every subsystem error. Each typed error
//! (`CommitteeError`, `CoreError`, `ConsensusError`) reports exactly one kind
//! through its `kind()` accessor so callers can branch without matching on
//! subsystem-specific variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a rejected operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Zero or null identifier (metachain id, Core or validator address).
    InvalidArgument,
    /// Operation attempted outside its required phase or lifetime.
    InvalidState,
    /// A block-height gate is not yet satisfied.
    TooEarly,
    /// Caller or Core is not allowed to perform the operation.
    Unauthorized,
    /// Committee membership is full.
    CapacityExceeded,
    /// Duplicate member, commit or reveal, or a reveal that does not match.
    Conflict,
}

impl ErrorKind {
    /// Stable lowercase label, used for metric labels and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::TooEarly => "too_early",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::CapacityExceeded => "capacity_exceeded",
            ErrorKind::Conflict => "conflict",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_distinct() {
        let kinds = [
            ErrorKind::InvalidArgument,
            ErrorKind::InvalidState,
            ErrorKind::TooEarly,
            ErrorKind::Unauthorized,
            ErrorKind::CapacityExceeded,
            ErrorKind::Conflict,
        ];
        let labels: std::collections::HashSet<_> = kinds.iter().map(|k| k.as_str()).collect();
        assert_eq!(labels.len(), kinds.len());
    }
}
