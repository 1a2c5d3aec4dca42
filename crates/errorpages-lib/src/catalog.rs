//! Status code classification against the fixed error catalog.
//!
//! The catalog maps every status code the ingress controller is configured
//! to intercept onto a stable label and message pair. It is built once on
//! first use and never mutated afterwards, so lookups need no locking.
//! [`classify`] is total: anything outside the table, including non-numeric
//! or empty input, resolves to the default classification.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Classification of an upstream failure: the short error label and the
/// human-readable message shown on the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorClassification {
    /// Short error label, e.g. "Not Found".
    pub label: &'static str,
    /// Human-readable message for the error document body.
    pub message: &'static str,
}

/// Fallback classification for status codes outside the catalog.
static DEFAULT_CLASSIFICATION: ErrorClassification = ErrorClassification {
    label: "Unexpected Error",
    message: "Oops! Something most likely went wrong on our end. Please try again later.",
};

/// Immutable catalog of the status codes the ingress intercepts.
static CATALOG: Lazy<HashMap<&'static str, ErrorClassification>> = Lazy::new(|| {
    HashMap::from([
        (
            "400",
            ErrorClassification {
                label: "Bad Request",
                message: "Oops! Something went wrong with your request. Please try again later.",
            },
        ),
        (
            "401",
            ErrorClassification {
                label: "Unauthorized",
                message: "Oops! You aren't authorized to access this URL",
            },
        ),
        (
            "403",
            ErrorClassification {
                label: "Forbidden",
                message: "Oops! You aren't authorized to access this URL",
            },
        ),
        (
            "404",
            ErrorClassification {
                label: "Not Found",
                message: "Oops! We couldn't find what you were looking for.",
            },
        ),
        (
            "500",
            ErrorClassification {
                label: "Internal Server Error",
                message: "Oops! Something went wrong on our end. Please try again later.",
            },
        ),
        (
            "502",
            ErrorClassification {
                label: "Bad Gateway",
                message: "Oops! Something went wrong on our end. Please try again later.",
            },
        ),
        (
            "503",
            ErrorClassification {
                label: "Service Unavailable",
                message: "Oops! The service you are trying to access is currently unavailable. \
                          Please try again later",
            },
        ),
        (
            "504",
            ErrorClassification {
                label: "Gateway Timeout",
                message: "Oops! The connection timed out on our end. Please try again later.",
            },
        ),
    ])
});

/// Look up the classification for an upstream status code.
///
/// Matching is by exact string comparison against the catalog keys; the
/// code is never parsed numerically, so "404 " or "0404" fall through to
/// the default entry just like "429" does.
pub fn classify(status_code: &str) -> &'static ErrorClassification {
    CATALOG.get(status_code).unwrap_or(&DEFAULT_CLASSIFICATION)
}
