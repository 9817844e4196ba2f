//! Trail type catalog resource definition.
//!
//! Exposes the supported trail types and their OpenStreetMap tag mappings
//! as a readable resource, mirroring the `list_trail_types` tool.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Trail type catalog resource (dynamic).
pub struct TrailTypesCatalogResource;

impl ResourceDefinition for TrailTypesCatalogResource {
    const URI: &'static str = "trails://types";
    const NAME: &'static str = "Trail Types";
    const DESCRIPTION: &'static str =
        "Supported trail types and the OpenStreetMap tags each one matches";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::TrailTypeCatalog)
    }
}
