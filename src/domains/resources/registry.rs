//! Resource Registry - central registration of all resources.
//!
//! This module provides dynamic resource registration without modifying service.rs.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{ResourceDefinition, ServerInfoResource, TrailTypesCatalogResource};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<TrailTypesCatalogResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        // Bounding box search template
        RawResourceTemplate {
            uri_template: "trails://bbox/{south}/{west}/{north}/{east}".to_string(),
            name: "Trails in Bounding Box".to_string(),
            title: Some("Trails by Coordinates".to_string()),
            description: Some(
                "All trails inside a bounding box given as south/west/north/east coordinates"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
        // Named area search template
        RawResourceTemplate {
            uri_template: "trails://area/{area_name}".to_string(),
            name: "Trails in Named Area".to_string(),
            title: Some("Trails by Area Name".to_string()),
            description: Some(
                "All trails inside a named park, city, or region".to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all static resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![TrailTypesCatalogResource::URI, ServerInfoResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 2);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&"trails://types"));
        assert!(uris.contains(&"mcp://server/info"));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 2);

        let uri_templates: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert!(uri_templates.contains(&"trails://bbox/{south}/{west}/{north}/{east}"));
        assert!(uri_templates.contains(&"trails://area/{area_name}"));
    }

    #[test]
    fn test_resource_uris() {
        let uris = resource_uris();
        assert_eq!(uris.len(), 2);
        assert!(uris.contains(&"trails://types"));
    }
}
