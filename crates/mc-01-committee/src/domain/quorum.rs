//! Quorum and majority arithmetic

use serde::{Deserialize, Serialize};

/// How many entered members a committee needs before it may cool down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuorumPolicy {
    /// Every seat must be filled.
    #[default]
    Strict,
    /// A simple majority of seats is enough.
    Majority,
}

impl QuorumPolicy {
    /// Members required to leave the Undefined state.
    pub fn required_members(&self, size: usize) -> usize {
        match self {
            QuorumPolicy::Strict => size,
            QuorumPolicy::Majority => majority(size),
        }
    }
}

/// Smallest count that is more than half of `total`.
pub fn majority(total: usize) -> usize {
    total / 2 + 1
}

/// True if `count` is strictly more than half of `total`.
///
/// Uses checked arithmetic so huge counts cannot wrap into a false result.
pub fn is_strict_majority(count: usize, total: usize) -> bool {
    if total == 0 {
        return false;
    }
    match count.checked_mul(2) {
        Some(doubled) => doubled > total,
        None => count > total / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_requires_full_committee() {
        assert_eq!(QuorumPolicy::Strict.required_members(3), 3);
        assert_eq!(QuorumPolicy::Strict.required_members(10), 10);
    }

    #[test]
    fn test_majority_policy() {
        assert_eq!(QuorumPolicy::Majority.required_members(3), 2);
        assert_eq!(QuorumPolicy::Majority.required_members(4), 3);
        assert_eq!(QuorumPolicy::Majority.required_members(1), 1);
    }

    #[test]
    fn test_strict_majority() {
        assert!(is_strict_majority(2, 3));
        assert!(!is_strict_majority(2, 4));
        assert!(is_strict_majority(3, 4));
        assert!(!is_strict_majority(0, 0));
        assert!(is_strict_majority(usize::MAX, usize::MAX));
    }
}
