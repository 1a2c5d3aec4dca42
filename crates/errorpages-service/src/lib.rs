//! Custom error pages backend for the Kubernetes NGINX Ingress Controller.
//!
//! The ingress controller forwards every intercepted upstream failure to
//! this service (its configured default backend) with the failure metadata
//! in `x-*` request headers, and serves whatever comes back to the end
//! user. Each request runs one linear pipeline:
//!
//! ```text
//! validate headers -> classify status code -> negotiate format -> render -> write
//! ```
//!
//! This crate provides the HTTP surface only; classification, negotiation
//! and rendering live in `errorpages-lib`. The pieces:
//!
//! - [`app`]: router assembly (`/healthz` plus the catch-all pipeline)
//! - [`AppState`]: the template asset loaded once at startup
//! - [`extract`]: required header validation
//! - [`handlers`]: the liveness endpoint and the rendering pipeline
//! - [`envelope`]: the fixed 500 envelope for invalid metadata and faults
//! - [`logging`]: structured JSON logging setup
//! - [`metrics`]: Prometheus exporter and business counters

#![deny(warnings)]

pub mod envelope;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod metrics;
mod state;

#[cfg(test)]
pub(crate) mod test_utils;

use axum::routing::any;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use envelope::{ErrorEnvelope, INVALID_METADATA_MESSAGE, RENDER_FAULT_MESSAGE};
pub use extract::{extract_context, MissingHeader};
pub use handlers::{healthz, render_error};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, record_page_rendered, record_request_rejected, MetricsConfig, MetricsError,
};
pub use state::AppState;

/// Build the service router.
///
/// `/healthz` is matched exactly, for any method, and bypasses the
/// pipeline; every other path and method falls through to the rendering
/// handler. A panic anywhere below the boundary is converted into the
/// standard 500 envelope so the ingress controller never sees a bare
/// connection reset.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", any(healthz))
        .fallback(render_error)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handlers::panic_envelope))
        .with_state(state)
}
