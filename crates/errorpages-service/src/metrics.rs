//! Prometheus metrics for the error pages backend.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Install the recorder and start the exporter listener
//! - Business metric helpers for the rendering pipeline
//!
//! The exporter serves scrapes from its own listener on a separate port.
//! The main router keeps exactly the routes the ingress contract defines,
//! so a scrape is never mistaken for an intercepted request.
//!
//! # Environment Variables
//!
//! - `METRICS_ENABLED`: "true" or "false" (default: true)
//! - `METRICS_PORT`: Exporter listener port (default: 9100)

use std::net::{Ipv4Addr, SocketAddr};

use metrics_exporter_prometheus::PrometheusBuilder;
use serde::{Deserialize, Serialize};

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
    /// Port the Prometheus exporter listens on.
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 9100,
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PORT`: Exporter listener port (default: 9100)
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let port = std::env::var("METRICS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(9100);

        Self { enabled, port }
    }
}

/// Install the Prometheus recorder and start the exporter HTTP listener.
///
/// Must be called once at application startup, inside the tokio runtime,
/// before any metrics are recorded. A repeat installation surfaces as
/// [`MetricsError::InstallFailed`].
///
/// # Errors
///
/// Returns an error if:
/// - Metrics are disabled in configuration
/// - The Prometheus builder fails to install or bind its listener
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Record a successfully rendered error page.
///
/// Increments the `errorpages_rendered_total` counter.
///
/// # Arguments
///
/// * `format` - The negotiated representation ("json", "html", "text")
/// * `error_type` - The catalog label (e.g., "Not Found"), which keeps the
///   label set bounded even when upstream status codes are arbitrary
pub fn record_page_rendered(format: &str, error_type: &str) {
    metrics::counter!(
        "errorpages_rendered_total",
        "format" => format.to_string(),
        "error_type" => error_type.to_string()
    )
    .increment(1);
}

/// Record a request rejected for incomplete ingress metadata.
///
/// Increments the `errorpages_invalid_requests_total` counter.
///
/// # Arguments
///
/// * `missing_header` - The first required header found absent or empty
pub fn record_request_rejected(missing_header: &str) {
    metrics::counter!(
        "errorpages_invalid_requests_total",
        "missing_header" => missing_header.to_string()
    )
    .increment(1);
}
