//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur when writing a rendered theme.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("failed to serialize theme as JSON")]
    Json(#[from] serde_json::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

/// `--format` value that isn't a known output format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format '{0}' (expected 'literal' or 'json')")]
pub struct UnknownFormat(pub String);

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
