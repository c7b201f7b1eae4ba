//! Sealed votes for the commit phase.
//!
//! A member commits `keccak256(vote ‖ salt)` and later reveals `vote` and
//! `salt`; the reveal is accepted only if it hashes back to the commit.

use shared_types::{keccak256, Hash};

/// Seal a vote with a salt.
pub fn seal_vote(vote: &Hash, salt: &Hash) -> Hash {
    keccak256(&[vote, salt])
}

/// Check that `vote` and `salt` open `sealed`.
pub fn verify_seal(sealed: &Hash, vote: &Hash, salt: &Hash) -> bool {
    seal_vote(vote, salt) == *sealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_opens_with_same_inputs() {
        let vote = [1u8; 32];
        let salt = [2u8; 32];
        let sealed = seal_vote(&vote, &salt);
        assert!(verify_seal(&sealed, &vote, &salt));
    }

    #[test]
    fn test_seal_rejects_other_salt() {
        let vote = [1u8; 32];
        let sealed = seal_vote(&vote, &[2u8; 32]);
        assert!(!verify_seal(&sealed, &vote, &[3u8; 32]));
    }

    #[test]
    fn test_vote_and_salt_are_not_interchangeable() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_ne!(seal_vote(&a, &b), seal_vote(&b, &a));
    }
}
