//! Trails domain: the query-translation and result-normalization core.
//!
//! ## Architecture
//!
//! - `types.rs` - domain data model (queries, raw elements, trails)
//! - `query.rs` - argument validation and Overpass QL rendering
//! - `pacer.rs` - shared fair-use request pacing
//! - `gateway.rs` - Overpass execution with timeout/retry discipline
//! - `normalize.rs` - raw element -> canonical trail mapping
//! - `stats.rs` - pure summary statistics
//! - `resolve.rs` - pluggable place-name resolution
//! - `service.rs` - pipeline orchestration used by tools and resources

mod error;
pub mod gateway;
pub mod normalize;
pub mod pacer;
pub mod query;
pub mod resolve;
pub mod service;
pub mod stats;
pub mod types;

pub use error::TrailError;
pub use gateway::{GatewayError, OverpassGateway};
pub use normalize::TrailNormalizer;
pub use pacer::RequestPacer;
pub use query::{AreaStrategy, QueryBuilder};
pub use resolve::{AreaResolver, ResolveError, StaticAreaResolver};
pub use service::TrailService;
pub use stats::{StatsAggregator, TrailStats, TypeCounts};
pub use types::{
    ACCESS_EXCLUDE, AreaSpec, BoundingBox, GeoPoint, GeoQuery, RawElement, Trail, TrailCollection,
    TrailType, TypeFilter,
};
