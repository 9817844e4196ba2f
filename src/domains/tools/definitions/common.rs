//! Common utilities shared across trail tools.
//!
//! This module provides shared functionality like area argument parsing,
//! response formatting, and error handling helpers.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::tools::ToolError;
use crate::domains::trails::{AreaSpec, BoundingBox, GatewayError, GeoPoint, TrailError};

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result carrying both a text summary and structured data.
pub fn structured_result<T: Serialize>(summary: String, data: T) -> CallToolResult {
    match serde_json::to_value(&data) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            success_result(summary)
        }
    }
}

/// Translate a trail pipeline error into a caller-facing tool result.
///
/// Bad input gets reported as-is; upstream failures are summarized without
/// leaking transport details.
pub fn trail_error_result(err: &TrailError) -> CallToolResult {
    let message = match err {
        TrailError::InvalidArgument(msg) => format!("Invalid arguments: {}", msg),
        TrailError::Gateway(GatewayError::Timeout) => {
            "The Overpass API did not respond in time. Try a smaller area or fewer trail types."
                .to_string()
        }
        TrailError::Gateway(GatewayError::Transient(msg)) => {
            format!("The Overpass API is temporarily unavailable: {}", msg)
        }
        TrailError::Gateway(GatewayError::InvalidQuery(msg)) => {
            format!("The Overpass API rejected the query: {}", msg)
        }
        TrailError::Gateway(GatewayError::MalformedResponse(msg)) => {
            format!("The Overpass API returned an unreadable response: {}", msg)
        }
    };
    error_result(&message)
}

/// Default number of trails included in a result.
pub fn default_limit() -> usize {
    50
}

/// Validate and clamp limit to allowed range (1-500).
pub fn validate_limit(limit: usize) -> usize {
    limit.clamp(1, 500)
}

/// Build an [`AreaSpec`] from the optional area arguments a tool accepts.
///
/// Exactly one of three forms must be provided: a named area, a full
/// bounding box, or a center point with a radius. Partial forms and
/// combinations are rejected.
pub fn area_from_args(
    area_name: &Option<String>,
    south: Option<f64>,
    west: Option<f64>,
    north: Option<f64>,
    east: Option<f64>,
    lat: Option<f64>,
    lon: Option<f64>,
    radius_meters: Option<f64>,
) -> Result<AreaSpec, ToolError> {
    let has_name = area_name.as_deref().is_some_and(|n| !n.trim().is_empty());
    let bbox_parts = [south, west, north, east];
    let has_bbox_part = bbox_parts.iter().any(Option::is_some);
    let around_parts = [lat, lon, radius_meters];
    let has_around_part = around_parts.iter().any(Option::is_some);

    let forms = [has_name, has_bbox_part, has_around_part]
        .iter()
        .filter(|&&f| f)
        .count();
    if forms > 1 {
        return Err(ToolError::invalid_arguments(
            "Provide only one of: area_name, a bounding box, or lat/lon/radius_meters",
        ));
    }

    if has_name {
        let name = area_name.as_deref().unwrap_or_default().trim().to_string();
        return Ok(AreaSpec::Named { name });
    }

    if has_bbox_part {
        return match (south, west, north, east) {
            (Some(south), Some(west), Some(north), Some(east)) => Ok(AreaSpec::Bounds(
                BoundingBox {
                    south,
                    west,
                    north,
                    east,
                },
            )),
            _ => Err(ToolError::invalid_arguments(
                "A bounding box requires all of: south, west, north, east",
            )),
        };
    }

    if has_around_part {
        return match (lat, lon, radius_meters) {
            (Some(lat), Some(lon), Some(radius_meters)) => Ok(AreaSpec::Around {
                center: GeoPoint { lat, lon },
                radius_meters,
            }),
            _ => Err(ToolError::invalid_arguments(
                "A radius search requires all of: lat, lon, radius_meters",
            )),
        };
    }

    Err(ToolError::invalid_arguments(
        "Provide an area: area_name, a bounding box (south/west/north/east), or lat/lon/radius_meters",
    ))
}

/// Format a length in meters for human display.
pub fn format_length(meters: f64) -> String {
    if meters >= 1_000.0 {
        format!("{:.1} km", meters / 1_000.0)
    } else {
        format!("{:.0} m", meters)
    }
}
