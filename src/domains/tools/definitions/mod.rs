//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod search_trails;
pub mod trail_stats;
pub mod trail_types;

pub use search_trails::{SearchTrailsParams, SearchTrailsTool};
pub use trail_stats::{TrailStatsParams, TrailStatsTool};
pub use trail_types::{TrailTypeCatalog, TrailTypesParams, TrailTypesTool};
