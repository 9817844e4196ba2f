//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Static resources are defined in `definitions/` and registered via
//! `registry.rs`. Templated `trails://` URIs are resolved on read by
//! running the trail pipeline.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::handlers::parse_trail_uri;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::{Config, ServerConfig};
use crate::domains::tools::definitions::TrailTypesTool;
use crate::domains::trails::{TrailService, TypeFilter};

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Server identity, reported by the info resource.
    server: ServerConfig,

    /// Trail pipeline used by templated `trails://` resources.
    trails: Arc<TrailService>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server information resource.
    ServerInfo,

    /// Catalog of supported trail types and their tag mappings.
    TrailTypeCatalog,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(config: &Config, trails: Arc<TrailService>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            server: config.server.clone(),
            trails,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.register_templates_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register all resource templates from the registry.
    fn register_templates_from_registry(&mut self) {
        info!("Registering resource templates from registry");
        self.templates = get_all_resource_templates();
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Static resources are looked up in the registry; `trails://bbox/...`
    /// and `trails://area/...` URIs run a trail search on demand.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if let Some(entry) = self.resources.get(uri) {
            let content = match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, dynamic_type)?
                }
            };
            return Ok(ReadResourceResult {
                contents: vec![content],
            });
        }

        if let Some(parsed) = parse_trail_uri(uri) {
            let area = parsed?;
            info!("Reading templated trail resource: {}", uri);
            let collection = self.trails.search(area, TypeFilter::Any).await?;
            let json = serde_json::to_string_pretty(&collection)
                .map_err(|e| ResourceError::internal(e.to_string()))?;
            return Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(json, uri)],
            });
        }

        Err(ResourceError::not_found(uri))
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "server": self.server.name,
                    "version": self.server.version,
                    "data_source": "OpenStreetMap Overpass API",
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
            DynamicResourceType::TrailTypeCatalog => {
                let catalog = TrailTypesTool::catalog();

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&catalog)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}
