//! Renderers for the negotiated response formats.
//!
//! All three renderers are pure: the caller captures the wall clock once
//! per request and passes it in, so a single request renders one instant
//! consistently and tests can pin timestamps. Renderers receive a fully
//! validated [`ErrorContext`] and never fail on request data; the only
//! fallible path is JSON serialization.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::Serialize;

use crate::catalog::ErrorClassification;
use crate::context::ErrorContext;
use crate::error::Result;
use crate::negotiate::ResponseFormat;
use crate::template::HtmlTemplate;

/// Final rendering artifact: the response body and its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPayload {
    /// Response body in the negotiated representation.
    pub body: String,
    /// Content type matching the body.
    pub content_type: &'static str,
}

/// Machine-readable error document for JSON consumers.
#[derive(Debug, Serialize)]
struct JsonPayload<'a> {
    error: String,
    meta: JsonMeta<'a>,
    date: String,
}

/// Correlation metadata block of the JSON document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMeta<'a> {
    uri: &'a str,
    status_code: &'a str,
    k8s_origin: String,
}

/// Format a timestamp as ISO 8601 with millisecond precision and a `Z`
/// suffix, e.g. `2026-08-25T12:30:45.123Z`.
///
/// Shared by the JSON renderer, the plain-text renderer and the service
/// error envelope so every emitted timestamp has the same shape.
pub fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render the error document for one request in the negotiated format.
///
/// The JSON and plain-text documents embed the full instant; the HTML
/// document only embeds the UTC year.
pub fn render_payload(
    format: ResponseFormat,
    ctx: &ErrorContext,
    classification: &ErrorClassification,
    template: &HtmlTemplate,
    now: DateTime<Utc>,
) -> Result<RenderedPayload> {
    let body = match format {
        ResponseFormat::Json => render_json(ctx, classification, now)?,
        ResponseFormat::Html => template.substitute(ctx, classification, now.year()),
        ResponseFormat::PlainText => render_text(ctx, classification, now),
    };

    Ok(RenderedPayload {
        body,
        content_type: format.content_type(),
    })
}

fn render_json(
    ctx: &ErrorContext,
    classification: &ErrorClassification,
    now: DateTime<Utc>,
) -> Result<String> {
    let payload = JsonPayload {
        error: format!("{} {}", ctx.status_code, classification.label),
        meta: JsonMeta {
            uri: &ctx.original_uri,
            status_code: &ctx.status_code,
            k8s_origin: ctx.k8s_origin(),
        },
        date: iso8601(now),
    };

    Ok(serde_json::to_string(&payload)?)
}

fn render_text(
    ctx: &ErrorContext,
    classification: &ErrorClassification,
    now: DateTime<Utc>,
) -> String {
    [
        format!("Error: {} {}", ctx.status_code, classification.label),
        format!("Message: {}", classification.message),
        format!("Date: {}", iso8601(now)),
        format!("Kubernetes Origin: {}", ctx.k8s_origin()),
        format!("Original URI: {}", ctx.original_uri),
    ]
    .join("\n")
}
