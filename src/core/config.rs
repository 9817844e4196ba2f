//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Overpass API gateway configuration.
    pub overpass: OverpassConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the Overpass API gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Interpreter endpoint URL.
    pub url: String,

    /// Deadline for a single HTTP request, in seconds.
    pub request_timeout_secs: u64,

    /// Timeout embedded in the query text (`[timeout:N]`), in seconds.
    pub query_timeout_secs: u32,

    /// Memory cap embedded in the query text (`[maxsize:N]`), in bytes.
    pub max_query_size_bytes: u64,

    /// Total attempts per query, first try included.
    pub max_retries: u32,

    /// Base backoff delay in milliseconds; doubles on each retry.
    pub base_delay_ms: u64,

    /// Minimum spacing between outbound requests, shared across all
    /// concurrent invocations (Overpass fair-use policy).
    pub min_request_interval_ms: u64,

    /// Upper bound for point-and-radius searches, in meters.
    pub max_radius_meters: f64,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    // Resources are registered in domains/resources/registry.rs
    // Add resource-specific configuration here if needed.
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
    // Add prompt-specific configuration here if needed.
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: "https://overpass-api.de/api/interpreter".to_string(),
            request_timeout_secs: 60,
            query_timeout_secs: 30,
            max_query_size_bytes: 1_073_741_824,
            max_retries: 3,
            base_delay_ms: 500,
            min_request_interval_ms: 1_000,
            max_radius_meters: 50_000.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "trail-explorer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            overpass: OverpassConfig::default(),
            resources: ResourcesConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_OVERPASS_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_OVERPASS_URL") {
            info!("Using Overpass endpoint from environment: {}", url);
            config.overpass.url = url;
        }

        if let Some(timeout) = env_parse::<u64>("MCP_OVERPASS_TIMEOUT_SECS") {
            config.overpass.request_timeout_secs = timeout;
        }

        if let Some(timeout) = env_parse::<u32>("MCP_OVERPASS_QUERY_TIMEOUT_SECS") {
            config.overpass.query_timeout_secs = timeout;
        }

        if let Some(retries) = env_parse::<u32>("MCP_OVERPASS_MAX_RETRIES") {
            config.overpass.max_retries = retries.max(1);
        }

        if let Some(interval) = env_parse::<u64>("MCP_OVERPASS_MIN_INTERVAL_MS") {
            config.overpass.min_request_interval_ms = interval;
        }

        if let Some(radius) = env_parse::<f64>("MCP_OVERPASS_MAX_RADIUS_M") {
            if radius.is_finite() && radius > 0.0 {
                config.overpass.max_radius_meters = radius;
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
