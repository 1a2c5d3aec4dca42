//! Request handlers: the liveness endpoint and the rendering pipeline.

use std::any::Any;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use tracing::{error, info, warn};

use errorpages_lib::{classify, render_payload, RenderedPayload, ResponseFormat};

use crate::envelope::{ErrorEnvelope, INVALID_METADATA_MESSAGE, RENDER_FAULT_MESSAGE};
use crate::extract::extract_context;
use crate::metrics::{record_page_rendered, record_request_rejected};
use crate::state::AppState;

/// Liveness endpoint for kubelet probes and the ingress health check.
///
/// Matches any method on exactly `/healthz` and answers before any header
/// inspection happens, so a probe never depends on ingress metadata.
pub async fn healthz() -> &'static str {
    "OK"
}

/// HTTP outcome of the rendering pipeline: a rendered document on success,
/// the 500 envelope otherwise.
#[derive(Debug)]
pub enum ErrorPageResponse {
    /// Rendered document served with status 200 and the negotiated
    /// content type.
    Rendered(RenderedPayload),
    /// Pipeline rejection or fault, served as the fixed 500 envelope.
    Failed(ErrorEnvelope),
}

impl IntoResponse for ErrorPageResponse {
    fn into_response(self) -> Response {
        match self {
            ErrorPageResponse::Rendered(payload) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, payload.content_type)],
                payload.body,
            )
                .into_response(),
            ErrorPageResponse::Failed(envelope) => envelope.into_response(),
        }
    }
}

/// Catch-all handler rendering the error document for a request forwarded
/// by the ingress controller.
///
/// The request path and method are never consulted; the pipeline is driven
/// entirely by the `x-*` headers. Exactly one response is produced per
/// request:
///
/// 1. validate headers (reject with the envelope on the first gap)
/// 2. classify the status code against the catalog
/// 3. negotiate the response format
/// 4. render and write with status 200
pub async fn render_error(State(state): State<AppState>, headers: HeaderMap) -> ErrorPageResponse {
    let ctx = match extract_context(&headers) {
        Ok(ctx) => ctx,
        Err(missing) => {
            warn!(
                header = missing.name(),
                "rejecting request with incomplete ingress metadata"
            );
            record_request_rejected(missing.name());
            return ErrorPageResponse::Failed(ErrorEnvelope::new(INVALID_METADATA_MESSAGE));
        }
    };

    // Access log line, one per intercepted request.
    info!("{} {} - {}", ctx.status_code, ctx.original_uri, ctx.k8s_origin());

    let classification = classify(&ctx.status_code);
    let format = ResponseFormat::negotiate(&ctx.accept_format);

    match render_payload(format, &ctx, classification, state.template(), Utc::now()) {
        Ok(payload) => {
            record_page_rendered(format.as_str(), classification.label);
            ErrorPageResponse::Rendered(payload)
        }
        Err(e) => {
            error!(request_id = %ctx.request_id, error = %e, "failed to render error page");
            ErrorPageResponse::Failed(ErrorEnvelope::new(RENDER_FAULT_MESSAGE))
        }
    }
}

/// Convert a panic caught at the service boundary into the standard
/// envelope, so the ingress controller always receives a well-formed
/// response body.
pub(crate) fn panic_envelope(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };

    error!(panic = detail, "panic while handling request");
    ErrorEnvelope::new(RENDER_FAULT_MESSAGE).into_response()
}
