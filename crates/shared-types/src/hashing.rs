//! Keccak-256 helpers used for vote seals and dislocation ordering.

use crate::entities::Hash;
use sha3::{Digest, Keccak256};

/// Keccak-256 over the concatenation of `parts`.
pub fn keccak256(parts: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
