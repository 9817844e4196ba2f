//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::trails::TrailService;

use super::definitions::{SearchTrailsTool, TrailStatsTool, TrailTypesTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(trails: Arc<TrailService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchTrailsTool::create_route(trails.clone()))
        .with_route(TrailStatsTool::create_route(trails))
        .with_route(TrailTypesTool::create_route())
}
