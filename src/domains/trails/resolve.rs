//! Pluggable place-name resolution.
//!
//! Mapping "Central Park" to a bounding box is a capability, not a core
//! concern: the trail service consults an [`AreaResolver`] when one is
//! configured and otherwise falls back to Overpass area-clause matching,
//! so the query core stays testable without any geocoding dependency.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use super::types::BoundingBox;

/// Errors from resolving a place name to an area.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resolver does not know this place.
    #[error("Unknown place: {0}")]
    NotFound(String),

    /// The resolver itself failed.
    #[error("Resolution failed: {0}")]
    Failed(String),
}

/// Resolves a place name to a bounding box.
#[async_trait]
pub trait AreaResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<BoundingBox, ResolveError>;
}

/// A fixed, in-memory lookup table. Matching is case-insensitive.
#[derive(Debug, Default)]
pub struct StaticAreaResolver {
    entries: HashMap<String, BoundingBox>,
}

impl StaticAreaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, name: impl Into<String>, bounds: BoundingBox) -> Self {
        self.entries.insert(name.into().to_lowercase(), bounds);
        self
    }
}

#[async_trait]
impl AreaResolver for StaticAreaResolver {
    async fn resolve(&self, name: &str) -> Result<BoundingBox, ResolveError> {
        self.entries
            .get(&name.trim().to_lowercase())
            .copied()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}
