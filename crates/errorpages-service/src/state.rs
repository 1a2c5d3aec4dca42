//! Application state for the error pages backend.
//!
//! This module provides the shared state structure that axum handlers use
//! to access the loaded HTML template.

use std::path::Path;
use std::sync::Arc;

use errorpages_lib::{HtmlTemplate, Result};

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. Everything inside is read-only
/// after startup, so handlers need no locking.
///
/// # Example
///
/// ```ignore
/// use axum::extract::State;
/// use errorpages_service::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let template = state.template();
///     // ... render with template
/// }
///
/// let state = AppState::load("/etc/errorpages/error.html").unwrap();
/// let app = errorpages_service::app(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    template: HtmlTemplate,
}

impl AppState {
    /// Load application state from the packaged template asset.
    ///
    /// Called once at startup; per-request rendering never touches the
    /// filesystem again.
    ///
    /// # Arguments
    ///
    /// * `template_path` - Path to the HTML template asset
    pub fn load(template_path: impl AsRef<Path>) -> Result<Self> {
        let template_path = template_path.as_ref();

        // Load the template
        tracing::info!(path = %template_path.display(), "loading error page template");
        let template = HtmlTemplate::load(template_path)?;
        tracing::info!(template_bytes = template.len(), "template loaded successfully");

        Ok(Self::from_template(template))
    }

    /// Create application state from a pre-built template.
    ///
    /// This is useful for testing or when loading from bundled bytes.
    pub fn from_template(template: HtmlTemplate) -> Self {
        Self {
            inner: Arc::new(AppStateInner { template }),
        }
    }

    /// Access the loaded template.
    pub fn template(&self) -> &HtmlTemplate {
        &self.inner.template
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("template_bytes", &self.inner.template.len())
            .finish()
    }
}
