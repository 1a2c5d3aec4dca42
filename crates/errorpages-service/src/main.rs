//! Custom error pages HTTP backend for the Kubernetes NGINX Ingress
//! Controller.
//!
//! The ingress controller forwards intercepted upstream failures to this
//! service with the failure metadata in `x-*` headers and serves the
//! rendered error document back to the end user.
//!
//! # Endpoints
//!
//! - `ANY /healthz` - Kubernetes liveness probe, fixed `OK` body
//! - anything else - error document rendering, driven by the `x-*` headers
//!
//! # Configuration
//!
//! - `ERRORPAGES_TEMPLATE_PATH` - Path to the HTML template asset
//!   (default: /etc/errorpages/error.html)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_PORT` - Prometheus exporter settings

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use errorpages_service::{
    app, init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig,
};

/// Listening port for the ingress-facing server. The ingress deployment
/// addresses the default backend on this port, so it is a constant of the
/// contract rather than configuration.
const SERVICE_PORT: u16 = 8080;

/// Default location of the template asset inside the container image.
const DEFAULT_TEMPLATE_PATH: &str = "/etc/errorpages/error.html";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config);

    // Initialize metrics
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Log but don't fail - metrics are optional
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    // Load configuration from environment
    let template_path =
        env::var("ERRORPAGES_TEMPLATE_PATH").unwrap_or_else(|_| DEFAULT_TEMPLATE_PATH.to_string());

    info!(template_path = %template_path, port = SERVICE_PORT, "starting error pages backend");

    // Load application state
    let state = AppState::load(&template_path).map_err(|e| {
        error!(error = %e, path = %template_path, "failed to load application state");
        e
    })?;

    // Build the router
    let app = app(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], SERVICE_PORT));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
