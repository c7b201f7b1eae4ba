//! # Committee Metrics
//!
//! Prometheus metrics for committee rounds.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! mc-01-committee = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `committee_phase_transitions_total` - Counter of status changes (by target status)
//! - `committee_decisions_total` - Counter of finished rounds (by outcome)
//! - `committee_rejected_operations_total` - Counter of rejected calls (by error kind)
//! - `committee_noop_pokes_total` - Counter of commit-close calls made before the timeout

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Status changes, labeled by target status
    pub static ref PHASE_TRANSITIONS: IntCounterVec = register_int_counter_vec!(
        "committee_phase_transitions_total",
        "Total number of committee status changes",
        &["to"]
    )
    .expect("Failed to create PHASE_TRANSITIONS metric");

    /// Finished rounds, labeled by outcome
    pub static ref DECISIONS: IntCounterVec = register_int_counter_vec!(
        "committee_decisions_total",
        "Total number of finished committee rounds",
        &["outcome"]
    )
    .expect("Failed to create DECISIONS metric");

    /// Rejected operations, labeled by error kind
    pub static ref REJECTED_OPERATIONS: IntCounterVec = register_int_counter_vec!(
        "committee_rejected_operations_total",
        "Total number of rejected committee operations",
        &["kind"]
    )
    .expect("Failed to create REJECTED_OPERATIONS metric");

    /// Commit-close pokes that arrived before the timeout
    pub static ref NOOP_POKES: IntCounter = register_int_counter!(
        "committee_noop_pokes_total",
        "Total number of commit-close calls made before the commit timeout"
    )
    .expect("Failed to create NOOP_POKES metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

#[cfg(feature = "metrics")]
pub fn record_phase_transition(to: &str) {
    PHASE_TRANSITIONS.with_label_values(&[to]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_decision(outcome: &str) {
    DECISIONS.with_label_values(&[outcome]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_rejected(kind: &str) {
    REJECTED_OPERATIONS.with_label_values(&[kind]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_noop_poke() {
    NOOP_POKES.inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_phase_transition(_to: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_decision(_outcome: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_rejected(_kind: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_noop_poke() {}
