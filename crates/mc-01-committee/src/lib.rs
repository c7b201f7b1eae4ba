//! # mc-01-committee
//!
//! Commit-reveal committee that votes on a single checkpoint proposal.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Ordered membership**: validators enter in order, no duplicates, bounded by size
//! - **Block-height phases**: activation, commit close and reveal close are timed in blocks
//! - **Sealed votes**: `keccak256(vote ‖ salt)` committed first, opened later
//! - **Strict majority**: a vote must win more than half of the reveals
//!
//! ## Architecture
//!
//! ```text
//! Consensus (2) ──enter_member──→ Committee (1)
//!                                     │
//!                 validators ─────────┼── submit_commit / reveal_vote
//!                                     │
//!                                     └── CommitteeDecision ──→ Consensus (2)
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//! [UNDEFINED] ──cooldown──→ [COOLDOWN] ──activate──→ [COMMIT PHASE] ──close──→ [REVEAL PHASE]
//!                                                                                   │
//!                                              [COMMITTED] ←──majority──────────────┤
//!                                              [INVALID]   ←──no majority───────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use mc_01_committee::{CommitteeApi, CommitteeConfig, CommitteeService, ManualClock};
//!
//! let clock = Arc::new(ManualClock::new(0));
//! let committee = CommitteeService::new(setup, CommitteeConfig::default(), clock.clone())?;
//!
//! committee.enter_member(consensus, validator)?;
//! committee.cooldown_committee()?;
//! clock.advance(COMMITTEE_ACTIVATION_DELAY);
//! committee.activate_committee()?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod types;

pub use adapters::ManualClock;
pub use domain::{
    is_strict_majority, majority, seal_vote, verify_seal, Committee, CommitteeDecision,
    CommitteeSetup, CommitteeStatus, MemberList, PhaseTransition, QuorumPolicy, RevealOutcome,
    TallyOutcome, VoteTally,
};
pub use error::{CommitteeError, CommitteeResult};
pub use events::{CommitteeEvent, PhaseChangedEvent};
pub use ports::inbound::{CommitteeApi, CommitteeSnapshot};
pub use ports::outbound::BlockClock;
pub use service::CommitteeService;
pub use types::{
    CommitteeConfig, COMMITTEE_ACTIVATION_DELAY, COMMITTEE_COMMIT_PHASE_TIMEOUT,
    COMMITTEE_REVEAL_PHASE_TIMEOUT,
};
