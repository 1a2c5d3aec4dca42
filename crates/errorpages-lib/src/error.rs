use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the error pages library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Template asset could not be located at the resolved path.
    #[error("error page template not found at {path}")]
    TemplateNotFound { path: PathBuf },

    /// Wrapper for IO errors raised while reading the template asset.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
