//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for tool calls
//! - Tool metadata for listing

use std::sync::Arc;

use tracing::warn;

use rmcp::model::{CallToolResult, Tool};

use crate::domains::trails::TrailService;

use super::definitions::{SearchTrailsTool, TrailStatsTool, TrailTypesTool};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching tool calls by name
pub struct ToolRegistry {
    trails: Arc<TrailService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(trails: Arc<TrailService>) -> Self {
        Self { trails }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchTrailsTool::NAME,
            TrailStatsTool::NAME,
            TrailTypesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchTrailsTool::to_tool(),
            TrailStatsTool::to_tool(),
            TrailTypesTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            SearchTrailsTool::NAME => {
                let params = parse_params(arguments)?;
                Ok(SearchTrailsTool::execute(params, self.trails.clone()).await)
            }
            TrailStatsTool::NAME => {
                let params = parse_params(arguments)?;
                Ok(TrailStatsTool::execute(params, self.trails.clone()).await)
            }
            TrailTypesTool::NAME => Ok(TrailTypesTool::execute()),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
