//! Prometheus exposition.
//!
//! Subsystem crates register their counters in the default registry when
//! built with their `metrics` feature; this module renders whatever is there.

use prometheus::{Encoder, TextEncoder};

use crate::TelemetryError;

/// Encode every registered metric as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
