//! Error types for the engine.

use thiserror::Error;

/// Errors raised while setting up a field or parsing host-supplied data.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The drawing context could not be acquired. Not retried.
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The configuration failed validation.
    #[error("Invalid field config: {0}")]
    InvalidConfig(String),

    /// Malformed JSON from the host page.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FieldError>;
