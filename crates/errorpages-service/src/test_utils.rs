//! Shared fixtures for the service test modules.

use std::sync::OnceLock;

use crate::state::AppState;

/// Path to the HTML template asset shipped with the repository.
pub const FIXTURE_TEMPLATE_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/error.html");

static FIXTURE_STATE: OnceLock<AppState> = OnceLock::new();

/// Application state loaded from the packaged template asset.
///
/// Loaded once and cached; a failure here means a broken checkout, not a
/// failing test subject.
pub fn fixture_state() -> AppState {
    FIXTURE_STATE
        .get_or_init(|| {
            AppState::load(FIXTURE_TEMPLATE_PATH).unwrap_or_else(|e| {
                panic!("failed to load template fixture {FIXTURE_TEMPLATE_PATH}: {e}")
            })
        })
        .clone()
}

/// The complete required header set of a well-formed ingress request.
pub fn valid_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("x-code", "404"),
        ("x-format", "application/json"),
        ("x-original-uri", "/missing"),
        ("x-namespace", "prod"),
        ("x-service-name", "web"),
        ("x-request-id", "abc123"),
    ]
}
