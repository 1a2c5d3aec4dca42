//! Required header extraction and validation.
//!
//! The ingress controller communicates entirely through request headers; the
//! request body, method and path carry no meaning. A request missing any
//! required field is malformed upstream metadata and is rejected before any
//! classification or rendering happens.

use axum::http::HeaderMap;
use errorpages_lib::ErrorContext;

/// Header carrying the upstream HTTP status code.
pub const HEADER_CODE: &str = "x-code";
/// Header carrying the desired response MIME type.
pub const HEADER_FORMAT: &str = "x-format";
/// Header carrying the URI the end user originally requested.
pub const HEADER_ORIGINAL_URI: &str = "x-original-uri";
/// Header carrying the cluster namespace of the failing upstream.
pub const HEADER_NAMESPACE: &str = "x-namespace";
/// Header carrying the upstream service identifier.
pub const HEADER_SERVICE_NAME: &str = "x-service-name";
/// Header carrying the correlation id assigned by the ingress.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

// x-ingress-name and x-service-port are also sent by the controller but
// carry nothing the rendered documents need; they are accepted and ignored.

/// A required ingress header was absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingHeader(pub &'static str);

impl MissingHeader {
    /// Name of the offending header.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for MissingHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing or empty required header: {}", self.0)
    }
}

impl std::error::Error for MissingHeader {}

/// Extract the validated request context from the inbound headers.
///
/// Lookups are case-insensitive (`HeaderMap` normalizes names). Extraction
/// short-circuits on the first required header that is absent or empty, so
/// a partial [`ErrorContext`] is never produced. Values are otherwise taken
/// verbatim; a whitespace-only value counts as present.
pub fn extract_context(headers: &HeaderMap) -> Result<ErrorContext, MissingHeader> {
    Ok(ErrorContext {
        status_code: required(headers, HEADER_CODE)?,
        accept_format: required(headers, HEADER_FORMAT)?,
        original_uri: required(headers, HEADER_ORIGINAL_URI)?,
        namespace: required(headers, HEADER_NAMESPACE)?,
        service_name: required(headers, HEADER_SERVICE_NAME)?,
        request_id: required(headers, HEADER_REQUEST_ID)?,
    })
}

/// Look up one required header, treating absent, non-ASCII and empty values
/// identically.
fn required(headers: &HeaderMap, name: &'static str) -> Result<String, MissingHeader> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .ok_or(MissingHeader(name))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn valid_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-code", HeaderValue::from_static("404"));
        headers.insert("x-format", HeaderValue::from_static("application/json"));
        headers.insert("x-original-uri", HeaderValue::from_static("/missing"));
        headers.insert("x-namespace", HeaderValue::from_static("prod"));
        headers.insert("x-service-name", HeaderValue::from_static("web"));
        headers.insert("x-request-id", HeaderValue::from_static("abc123"));
        headers
    }

    #[test]
    fn test_extract_complete_headers() {
        let ctx = extract_context(&valid_headers()).unwrap();

        assert_eq!(ctx.status_code, "404");
        assert_eq!(ctx.accept_format, "application/json");
        assert_eq!(ctx.original_uri, "/missing");
        assert_eq!(ctx.namespace, "prod");
        assert_eq!(ctx.service_name, "web");
        assert_eq!(ctx.request_id, "abc123");
    }

    #[test]
    fn test_extract_each_required_header_enforced() {
        let required_names = [
            HEADER_CODE,
            HEADER_FORMAT,
            HEADER_ORIGINAL_URI,
            HEADER_NAMESPACE,
            HEADER_SERVICE_NAME,
            HEADER_REQUEST_ID,
        ];

        for name in required_names {
            let mut headers = valid_headers();
            headers.remove(name);

            let err = extract_context(&headers).unwrap_err();
            assert_eq!(err.name(), name, "removed {name}");
        }
    }

    #[test]
    fn test_extract_empty_value_counts_as_missing() {
        let mut headers = valid_headers();
        headers.insert("x-code", HeaderValue::from_static(""));

        let err = extract_context(&headers).unwrap_err();
        assert_eq!(err.name(), HEADER_CODE);
    }

    #[test]
    fn test_extract_whitespace_value_counts_as_present() {
        let mut headers = valid_headers();
        headers.insert("x-request-id", HeaderValue::from_static("  "));

        let ctx = extract_context(&headers).unwrap();
        assert_eq!(ctx.request_id, "  ");
    }

    #[test]
    fn test_extract_header_names_case_insensitive() {
        let mut headers = valid_headers();
        headers.remove("x-code");
        headers.insert("X-Code", HeaderValue::from_static("503"));

        let ctx = extract_context(&headers).unwrap();
        assert_eq!(ctx.status_code, "503");
    }

    #[test]
    fn test_extract_ignores_optional_headers() {
        let mut headers = valid_headers();
        headers.insert("x-ingress-name", HeaderValue::from_static("public"));
        headers.insert("x-service-port", HeaderValue::from_static("8080"));

        assert!(extract_context(&headers).is_ok());
    }

    #[test]
    fn test_missing_header_display() {
        let err = MissingHeader(HEADER_NAMESPACE);
        assert_eq!(
            err.to_string(),
            "missing or empty required header: x-namespace"
        );
    }
}
