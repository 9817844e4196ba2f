//! Trail search tool.
//!
//! This tool finds hiking, biking, and walking trails in an area by
//! querying the OpenStreetMap Overpass API.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{
    area_from_args, default_limit, error_result, format_length, structured_result,
    trail_error_result, validate_limit,
};
use crate::domains::trails::{GeoPoint, GeoQuery, Trail, TrailCollection, TrailService, TypeFilter};

/// Parameters for trail search operations.
///
/// Exactly one area form must be provided: `area_name`, a full bounding box
/// (`south`/`west`/`north`/`east`), or a point with `lat`/`lon`/`radius_meters`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchTrailsParams {
    /// Name of a park, city, or region to search within.
    #[schemars(description = "Named area to search (e.g., 'Yosemite National Park')")]
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

    /// Maximum number of trails to include in the result (default: 50, max: 500).
    #[schemars(description = "Maximum number of trails returned (default: 50, max: 500)")]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Structured output for trail search results.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TrailSearchResult {
    /// The query that was executed, with any named area resolution applied.
    pub query: GeoQuery,
    pub trails: Vec<TrailInfo>,
    /// Total matching trails before truncation.
    pub total_count: usize,
    /// Number of trails in `trails` after truncation.
    pub returned_count: usize,
    /// Elements discarded for unusable geometry.
    pub skipped: usize,
    /// Whether `trails` was truncated to the requested limit.
    pub truncated: bool,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TrailInfo {
    pub id: String,
    pub name: String,
    pub trail_type: String,
    pub length_meters: f64,
    /// First point of the trail geometry.
    pub start: GeoPoint,
    /// Number of geometry points.
    pub points: usize,
    pub surface: Option<String>,
    pub difficulty: Option<String>,
}

/// Trail search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchTrailsTool;

impl SearchTrailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_trails";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Find hiking, biking, and walking trails in an area using OpenStreetMap data. Accepts a named area, a bounding box, or a point with a radius, plus an optional trail type filter. Returns structured trail data with names, types, lengths, and surface information.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    pub async fn execute(params: SearchTrailsParams, trails: Arc<TrailService>) -> CallToolResult {
        let limit = validate_limit(params.limit);

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

        info!("Searching trails: area={:?}", area);

        match trails.search(area, types).await {
            Ok(collection) => {
                let (summary, result) = summarize(collection, limit);
                structured_result(summary, result)
            }
            Err(e) => trail_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchTrailsParams>(),
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
                let params: SearchTrailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(params, trails).await)
            }
            .boxed()
        })
    }
}

impl Default for SearchTrailsTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a trail collection into a summary line and structured payload,
/// truncating to `limit` trails.
fn summarize(collection: TrailCollection, limit: usize) -> (String, TrailSearchResult) {
    let total_count = collection.trails.len();
    let truncated = total_count > limit;

    let trails: Vec<TrailInfo> = collection
        .trails
        .into_iter()
        .take(limit)
        .map(trail_info)
        .collect();
    let returned_count = trails.len();

    let mut summary = format!("Found {} trail(s)", total_count);
    if truncated {
        summary.push_str(&format!(", showing the first {}", returned_count));
    }
    if collection.skipped > 0 {
        summary.push_str(&format!(
            " ({} element(s) skipped for unusable geometry)",
            collection.skipped
        ));
    }
    if let Some(longest) = trails
        .iter()
        .max_by(|a, b| a.length_meters.total_cmp(&b.length_meters))
    {
        summary.push_str(&format!(
            ". Longest: '{}' at {}",
            longest.name,
            format_length(longest.length_meters)
        ));
    }

    let result = TrailSearchResult {
        query: collection.query,
        trails,
        total_count,
        returned_count,
        skipped: collection.skipped,
        truncated,
        fetched_at: collection.fetched_at,
    };

    (summary, result)
}

fn trail_info(trail: Trail) -> TrailInfo {
    let start = trail
        .geometry
        .first()
        .copied()
        .unwrap_or(GeoPoint { lat: 0.0, lon: 0.0 });
    TrailInfo {
        id: trail.id,
        name: trail.name,
        trail_type: trail.trail_type.as_str().to_string(),
        length_meters: trail.length_meters,
        start,
        points: trail.geometry.len(),
        surface: trail.surface,
        difficulty: trail.difficulty,
    }
}
