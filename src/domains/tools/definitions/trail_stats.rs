//! Trail statistics tool.
//!
//! Aggregates the trails matching an area and type filter into summary
//! statistics: counts per type, total length, geographic bounds, and
//! surface/difficulty histograms.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{
    area_from_args, error_result, format_length, structured_result, trail_error_result,
};
use crate::domains::trails::{TrailService, TrailStats, TypeFilter};

/// Parameters for trail statistics.
///
/// Area selection follows the same rules as `search_trails`: exactly one of
/// a named area, a bounding box, or a point with a radius.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrailStatsParams {
    /// Name of a park, city, or region to aggregate over.
    #[schemars(description = "Named area to aggregate (e.g., 'Lake District')")]
    pub area_name: Option<String>,

    /// Southern latitude of a bounding box.
    #[schemars(description = "Bounding box: southern latitude")]
    pub south: Option<f64>,

    /// Western longitude of a bounding box.
    #[schemars(description = "Bounding box: western longitude")]
    pub west: Option<f64>,

    /// Northern latitude of a bounding box.
    #[schemars(description = "Bounding box: northern latitude")]
    pub north: Option<f64>,

    /// Eastern longitude of a bounding box.
    #[schemars(description = "Bounding box: eastern longitude")]
    pub east: Option<f64>,

    /// Latitude of the center of a radius search.
    #[schemars(description = "Radius search: center latitude")]
    pub lat: Option<f64>,

    /// Longitude of the center of a radius search.
    #[schemars(description = "Radius search: center longitude")]
    pub lon: Option<f64>,

    /// Radius around the center, in meters.
    #[schemars(description = "Radius search: radius in meters")]
    pub radius_meters: Option<f64>,

    /// Trail types to include. Empty or ["any"] means all types.
    #[schemars(description = "Trail types: 'hiking', 'biking', 'walking', or 'any' (default: any)")]
    #[serde(default)]
    pub trail_types: Vec<String>,
}

/// Trail statistics tool implementation.
#[derive(Debug, Clone)]
pub struct TrailStatsTool;

impl TrailStatsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_trail_statistics";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Compute summary statistics for trails in an area: counts per trail type, total length, geographic bounds, and surface/difficulty distributions. Accepts the same area forms as search_trails.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    pub async fn execute(params: TrailStatsParams, trails: Arc<TrailService>) -> CallToolResult {
        let area = match area_from_args(
            &params.area_name,
            params.south,
            params.west,
            params.north,
            params.east,
            params.lat,
            params.lon,
            params.radius_meters,
        ) {
            Ok(area) => area,
            Err(e) => return error_result(&e.to_string()),
        };

        let types = match TypeFilter::parse(&params.trail_types) {
            Ok(types) => types,
            Err(e) => return trail_error_result(&e),
        };

        info!("Aggregating trail statistics: area={:?}", area);

        match trails.stats(area, types).await {
            Ok(stats) => {
                let summary = summarize(&stats);
                structured_result(summary, stats)
            }
            Err(e) => trail_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TrailStatsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(trails: Arc<TrailService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let trails = trails.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: TrailStatsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(params, trails).await)
            }
            .boxed()
        })
    }
}

impl Default for TrailStatsTool {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(stats: &TrailStats) -> String {
    if stats.total == 0 {
        return "No trails found in the requested area".to_string();
    }

    format!(
        "{} trail(s), {} total ({} hiking, {} biking, {} walking, {} unclassified)",
        stats.total,
        format_length(stats.total_length_meters),
        stats.by_type.hiking,
        stats.by_type.biking,
        stats.by_type.walking,
        stats.by_type.unknown,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::trails::{StatsAggregator, TypeCounts};

    #[test]
    fn test_params_deserialize_named_area() {
        let json = r#"{"area_name": "Lake District", "trail_types": ["hiking"]}"#;
        let params: TrailStatsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.area_name.as_deref(), Some("Lake District"));
        assert_eq!(params.trail_types, vec!["hiking"]);
    }

    #[test]
    fn test_summarize_empty() {
        let stats = StatsAggregator::aggregate(&[]);
        assert_eq!(summarize(&stats), "No trails found in the requested area");
    }

    #[test]
    fn test_summarize_counts() {
        let stats = TrailStats {
            total: 4,
            by_type: TypeCounts {
                hiking: 2,
                biking: 1,
                walking: 1,
                unknown: 0,
            },
            total_length_meters: 12_000.0,
            bounds: None,
            surfaces: Default::default(),
            difficulties: Default::default(),
        };
        let summary = summarize(&stats);
        assert!(summary.contains("4 trail(s)"));
        assert!(summary.contains("12.0 km"));
        assert!(summary.contains("2 hiking"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = TrailStatsTool::to_tool();
        assert_eq!(tool.name, "get_trail_statistics");
        assert!(tool.description.is_some());
    }
}
