//! Content negotiation for the rendered error document.
//!
//! The desired representation arrives in the `x-format` header, which the
//! ingress controller populates from the original request's `Accept`
//! header. Matching is deliberately permissive: parameters after the first
//! `;` are discarded and the remainder is scanned for known MIME types, so
//! multi-valued lists such as `text/html, */*` still resolve.

/// Response representation selected from the forwarded format header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Machine-readable JSON document.
    Json,
    /// Styled HTML page rendered from the template asset.
    Html,
    /// Plain text summary, also the fallback for anything unrecognized.
    PlainText,
}

impl ResponseFormat {
    /// Select a renderer from the raw format header value.
    ///
    /// Quality factors and charset parameters are ignored. The plain-text
    /// fallback is a normal rendering path, not an error: an absent or
    /// unrecognized preference still yields a complete document.
    pub fn negotiate(format: &str) -> Self {
        let mime = format.split(';').next().unwrap_or(format);
        if mime.contains("application/json") {
            ResponseFormat::Json
        } else if mime.contains("text/html") {
            ResponseFormat::Html
        } else {
            ResponseFormat::PlainText
        }
    }

    /// Content type written to the response for this representation.
    pub fn content_type(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Html => "text/html",
            ResponseFormat::PlainText => "text/plain",
        }
    }

    /// Short lowercase label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Html => "html",
            ResponseFormat::PlainText => "text",
        }
    }
}
