//! Structured 500 envelope for malformed metadata and internal faults.
//!
//! Requests reach this service only through the ingress controller, so a
//! request with broken metadata is a server-side contract violation, not a
//! client error. Every failure therefore terminates as HTTP 500 with this
//! fixed JSON shape regardless of the format the request asked for.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use errorpages_lib::iso8601;

/// Envelope message when required ingress headers are missing or empty.
pub const INVALID_METADATA_MESSAGE: &str =
    "Invalid request sent from Kubernetes NGINX Ingress Controller";

/// Envelope message when the pipeline fails after validation. The wire
/// carries only this generic text; the detail goes to the error log.
pub const RENDER_FAULT_MESSAGE: &str = "Failed to render the error page";

/// JSON error envelope terminating a request with HTTP 500.
///
/// Shape is fixed: `{"error": "...", "date": "<iso8601>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// What went wrong.
    pub error: String,
    /// Instant the envelope was produced.
    pub date: String,
}

impl ErrorEnvelope {
    /// Create an envelope stamped with the current instant.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            date: iso8601(Utc::now()),
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
