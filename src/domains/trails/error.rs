//! Trails-domain error types.

use thiserror::Error;

use super::gateway::GatewayError;

/// Errors that can occur while building or executing a trail query.
#[derive(Debug, Error)]
pub enum TrailError {
    /// Malformed or out-of-range input, caught before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by the Overpass gateway.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl TrailError {
    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
