//! # Metachain Telemetry
//!
//! Logging and metrics setup shared by the metachain subsystems.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mc_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!
//!     // Committee and consensus logs now go through the installed subscriber
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `metachain` | Service name in logs |
//! | `MC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directives |
//! | `MC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `MC_JSON_LOGS` | `false` | JSON lines output (on by default in containers) |
//! | `MC_NETWORK` | `devnet` | Network name |

mod config;
mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::encode_metrics;
pub use tracing_setup::{build_filter, init_tracing, TracingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to encode Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the process.
///
/// Returns a guard that must be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let tracing_guard = init_tracing(&config)?;
    Ok(TelemetryGuard {
        _tracing: tracing_guard,
        config,
    })
}

/// Guard that keeps telemetry active.
#[derive(Debug)]
pub struct TelemetryGuard {
    _tracing: TracingGuard,
    config: TelemetryConfig,
}

impl TelemetryGuard {
    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }
}
