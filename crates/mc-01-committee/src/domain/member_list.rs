//! Insertion-ordered committee membership
//!
//! Members live in an arena vector in the order they entered; a hash index maps
//! each validator to its slot. Membership checks, insertion and "next member"
//! traversal are all O(1) and there is no sentinel entry to special-case.

use shared_types::{keccak256, Address, Hash};
use std::collections::HashMap;

/// Ordered set of committee members.
#[derive(Clone, Debug, Default)]
pub struct MemberList {
    slots: Vec<Address>,
    index: HashMap<Address, usize>,
}

impl MemberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append `member`. Returns false if it is already present.
    pub fn insert(&mut self, member: Address) -> bool {
        if self.index.contains_key(&member) {
            return false;
        }
        self.index.insert(member, self.slots.len());
        self.slots.push(member);
        true
    }

    pub fn contains(&self, member: &Address) -> bool {
        self.index.contains_key(member)
    }

    /// Position of `member` in entry order.
    pub fn position(&self, member: &Address) -> Option<usize> {
        self.index.get(member).copied()
    }

    pub fn first(&self) -> Option<Address> {
        self.slots.first().copied()
    }

    /// Member that entered right after `member`, if any.
    pub fn next(&self, member: &Address) -> Option<Address> {
        let position = self.position(member)?;
        self.slots.get(position + 1).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.slots.iter()
    }

    /// Members ordered by their distance to `proposal` under the `dislocation`
    /// seed, closest first.
    ///
    /// distance(member) = keccak256(dislocation ‖ member) XOR proposal
    ///
    /// Ties are impossible for distinct members barring a hash collision; entry
    /// order breaks them anyway so the ranking is total.
    pub fn ranked_by_distance(&self, dislocation: &Hash, proposal: &Hash) -> Vec<Address> {
        let mut ranked: Vec<(Hash, usize, Address)> = self
            .slots
            .iter()
            .enumerate()
            .map(|(position, member)| {
                (distance(dislocation, proposal, member), position, *member)
            })
            .collect();
        ranked.sort_unstable();
        ranked.into_iter().map(|(_, _, member)| member).collect()
    }
}

fn distance(dislocation: &Hash, proposal: &Hash, member: &Address) -> Hash {
    let shuffled = keccak256(&[dislocation, member.as_bytes()]);
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = shuffled[i] ^ proposal[i];
    }
    out
}
