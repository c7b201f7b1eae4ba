//! Domain module for the Committee subsystem
//!
//! - committee: the commit-reveal state machine
//! - member_list: insertion-ordered membership
//! - quorum: quorum and majority arithmetic
//! - seal: sealed votes
//! - tally: reveal counting
//! - decision: the record a finished round produces

pub mod committee;
pub mod decision;
pub mod member_list;
pub mod quorum;
pub mod seal;
pub mod tally;

pub use committee::{Committee, CommitteeSetup, CommitteeStatus, PhaseTransition, RevealOutcome};
pub use decision::CommitteeDecision;
pub use member_list::MemberList;
pub use quorum::{is_strict_majority, majority, QuorumPolicy};
pub use seal::{seal_vote, verify_seal};
pub use tally::{TallyOutcome, VoteTally};
