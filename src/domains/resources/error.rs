//! Resource-specific error types.

use thiserror::Error;

use crate::domains::trails::TrailError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource URI is invalid.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// An upstream data source failed while producing the resource.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<TrailError> for ResourceError {
    fn from(err: TrailError) -> Self {
        match err {
            TrailError::InvalidArgument(msg) => Self::InvalidUri(msg),
            TrailError::Gateway(e) => Self::Upstream(e.to_string()),
        }
    }
}
