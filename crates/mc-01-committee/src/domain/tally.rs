//! Reveal tally
//!
//! Votes are counted per vote hash. A vote wins only with a strict majority of
//! the revealed votes, and only if enough members revealed at all. There is no
//! tie-break: an ambiguous outcome is reported as such.

use super::quorum::is_strict_majority;
use shared_types::Hash;
use std::collections::HashMap;

/// Outcome of counting revealed votes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TallyOutcome {
    /// `vote` holds a strict majority of the `revealed` votes.
    Decided { vote: Hash, votes: usize, revealed: usize },
    /// Enough reveals, but no vote holds a strict majority.
    NoMajority { revealed: usize },
    /// Fewer reveals than the reveal quorum.
    InsufficientReveals { revealed: usize, required: usize },
}

impl TallyOutcome {
    pub fn decision(&self) -> Option<Hash> {
        match self {
            TallyOutcome::Decided { vote, .. } => Some(*vote),
            _ => None,
        }
    }
}

/// Vote counts keyed by vote hash.
#[derive(Clone, Debug, Default)]
pub struct VoteTally {
    counts: HashMap<Hash, usize>,
    revealed: usize,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, vote: Hash) {
        *self.counts.entry(vote).or_insert(0) += 1;
        self.revealed += 1;
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn count(&self, vote: &Hash) -> usize {
        self.counts.get(vote).copied().unwrap_or(0)
    }

    /// Decide the tally given the minimum number of reveals required.
    pub fn outcome(&self, reveal_quorum: usize) -> TallyOutcome {
        if self.revealed == 0 || self.revealed < reveal_quorum {
            return TallyOutcome::InsufficientReveals {
                revealed: self.revealed,
                required: reveal_quorum,
            };
        }

        // At most one vote can hold a strict majority.
        self.counts
            .iter()
            .find(|&(_, &votes)| is_strict_majority(votes, self.revealed))
            .map(|(vote, &votes)| TallyOutcome::Decided {
                vote: *vote,
                votes,
                revealed: self.revealed,
            })
            .unwrap_or(TallyOutcome::NoMajority {
                revealed: self.revealed,
            })
    }
}

impl FromIterator<Hash> for VoteTally {
    fn from_iter<I: IntoIterator<Item = Hash>>(iter: I) -> Self {
        let mut tally = VoteTally::new();
        for vote in iter {
            tally.add(vote);
        }
        tally
    }
}
