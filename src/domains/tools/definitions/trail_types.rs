//! Trail type catalog tool.
//!
//! Lists the trail types the server understands and the OpenStreetMap
//! tags each one matches. Purely informational, no network access.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::structured_result;
use crate::domains::trails::{ACCESS_EXCLUDE, TrailType};

/// Parameters for listing trail types (none required).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TrailTypesParams {}

/// Structured catalog of supported trail types.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TrailTypeCatalog {
    pub types: Vec<TrailTypeEntry>,
    /// `access` tag values that exclude a way from results.
    pub access_excluded: Vec<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TrailTypeEntry {
    pub name: String,
    pub description: String,
    /// Matching `route` tag values on relations.
    pub route_tags: Vec<String>,
    /// Matching `highway` tag values on ways.
    pub highway_tags: Vec<String>,
}

/// Trail type catalog tool implementation.
#[derive(Debug, Clone)]
pub struct TrailTypesTool;

impl TrailTypesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_trail_types";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the trail types this server can search for (hiking, biking, walking) and the OpenStreetMap tags each type matches. Useful for choosing trail_types values for search_trails.";

    pub fn new() -> Self {
        Self
    }

    /// Build the catalog. Shared with the `trails://types` resource.
    pub fn catalog() -> TrailTypeCatalog {
        let types = TrailType::REQUESTABLE
            .into_iter()
            .map(|trail_type| TrailTypeEntry {
                name: trail_type.as_str().to_string(),
                description: Self::describe(trail_type).to_string(),
                route_tags: trail_type
                    .route_values()
                    .iter()
                    .map(|v| v.to_string())
                    .collect(),
                highway_tags: trail_type
                    .highway_values()
                    .iter()
                    .map(|v| v.to_string())
                    .collect(),
            })
            .collect();

        TrailTypeCatalog {
            types,
            access_excluded: ACCESS_EXCLUDE.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn describe(trail_type: TrailType) -> &'static str {
        match trail_type {
            TrailType::Hiking => {
                "Foot trails and hiking routes, including paths and tracks open to pedestrians"
            }
            TrailType::Biking => "Cycling routes, cycleways, and mountain bike trails",
            TrailType::Walking => "Urban walking routes, footways, and pedestrian areas",
            TrailType::Unknown => "Trails whose type could not be determined from tags",
        }
    }

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        let catalog = Self::catalog();
        let names: Vec<_> = catalog.types.iter().map(|t| t.name.as_str()).collect();
        let summary = format!("Supported trail types: {}", names.join(", "));
        structured_result(summary, catalog)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TrailTypesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let _params: TrailTypesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute())
            }
            .boxed()
        })
    }
}

impl Default for TrailTypesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_catalog_covers_all_requestable_types() {
        let catalog = TrailTypesTool::catalog();
        let names: Vec<_> = catalog.types.iter().map(|t| t.name.as_str()).collect();
        let expected: Vec<_> = TrailType::REQUESTABLE.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, expected);
        assert!(catalog.types.iter().all(|t| !t.description.is_empty()));
    }

    #[test]
    fn test_catalog_hiking_tags() {
        let catalog = TrailTypesTool::catalog();
        let hiking = &catalog.types[0];
        assert!(hiking.route_tags.contains(&"hiking".to_string()));
        assert!(hiking.route_tags.contains(&"foot".to_string()));
        assert!(hiking.highway_tags.contains(&"path".to_string()));
    }

    #[test]
    fn test_catalog_access_exclusions() {
        let catalog = TrailTypesTool::catalog();
        assert_eq!(catalog.access_excluded, vec!["private", "no"]);
    }

    #[test]
    fn test_execute_success() {
        let result = TrailTypesTool::execute();
        assert_eq!(result.is_error, Some(false));
        assert!(result.structured_content.is_some());
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("hiking"));
        }
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = TrailTypesTool::to_tool();
        assert_eq!(tool.name, "list_trail_types");
        assert!(tool.description.is_some());
    }
}
