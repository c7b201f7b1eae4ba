//! # Consensus Metrics
//!
//! Enable with the `metrics` feature.
//!
//! - `consensus_logouts_total` - Counter of logout requests (by outcome)
//! - `consensus_core_promotions_total` - Counter of Genesis → Active promotions
//! - `consensus_decisions_total` - Counter of accepted committee decisions (by status)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref LOGOUTS: IntCounterVec = register_int_counter_vec!(
        "consensus_logouts_total",
        "Total number of validator logout requests",
        &["outcome"]
    )
    .expect("Failed to create LOGOUTS metric");

    pub static ref CORE_PROMOTIONS: IntCounter = register_int_counter!(
        "consensus_core_promotions_total",
        "Total number of Cores promoted from genesis to active"
    )
    .expect("Failed to create CORE_PROMOTIONS metric");

    pub static ref DECISIONS: IntCounterVec = register_int_counter_vec!(
        "consensus_decisions_total",
        "Total number of accepted committee decisions",
        &["status"]
    )
    .expect("Failed to create DECISIONS metric");
}

#[cfg(feature = "metrics")]
pub fn record_logout(outcome: &str) {
    LOGOUTS.with_label_values(&[outcome]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_core_promotion() {
    CORE_PROMOTIONS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_decision(status: &str) {
    DECISIONS.with_label_values(&[status]).inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_logout(_outcome: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_core_promotion() {}

#[cfg(not(feature = "metrics"))]
pub fn record_decision(_status: &str) {}
