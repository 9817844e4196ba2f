//! Trail service: the query pipeline behind every tool and resource.
//!
//! Orchestrates QueryBuilder -> OverpassGateway -> TrailNormalizer. Each
//! call is independent and stateless; the only state shared between
//! concurrent calls is the gateway's request pacer.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::core::config::OverpassConfig;

use super::error::TrailError;
use super::gateway::{GatewayError, OverpassGateway};
use super::normalize::TrailNormalizer;
use super::pacer::RequestPacer;
use super::query::{AreaStrategy, QueryBuilder};
use super::resolve::{AreaResolver, ResolveError};
use super::stats::{StatsAggregator, TrailStats};
use super::types::{AreaSpec, GeoQuery, RawElement, TrailCollection, TypeFilter};

/// Executes trail queries end to end.
pub struct TrailService {
    builder: QueryBuilder,
    gateway: OverpassGateway,
    resolver: Option<Arc<dyn AreaResolver>>,
}

impl TrailService {
    pub fn new(config: &OverpassConfig) -> crate::core::Result<Self> {
        let pacer = Arc::new(RequestPacer::new(Duration::from_millis(
            config.min_request_interval_ms,
        )));
        Ok(Self {
            builder: QueryBuilder::new(config),
            gateway: OverpassGateway::new(config.clone(), pacer)?,
            resolver: None,
        })
    }

    /// Install a place-name resolver consulted before the Overpass
    /// area-clause fallback.
    pub fn with_resolver(mut self, resolver: Arc<dyn AreaResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Search for trails in the given area. An empty result is a normal
    /// success; gateway failures propagate as errors.
    pub async fn search(
        &self,
        area: AreaSpec,
        types: TypeFilter,
    ) -> Result<TrailCollection, TrailError> {
        let query = self.builder.build(area, types)?;
        let (query, elements) = self.execute(query).await?;

        let normalized = TrailNormalizer::normalize(elements);
        info!(
            "Query produced {} trail(s), {} element(s) skipped",
            normalized.trails.len(),
            normalized.skipped
        );

        Ok(TrailCollection::new(
            query,
            normalized.trails,
            normalized.skipped,
        ))
    }

    /// Summary statistics for an area: a search followed by pure
    /// aggregation.
    pub async fn stats(&self, area: AreaSpec, types: TypeFilter) -> Result<TrailStats, TrailError> {
        let collection = self.search(area, types).await?;
        Ok(StatsAggregator::aggregate(&collection.trails))
    }

    /// Run a validated query against the gateway, returning the query
    /// that was actually executed (named areas may be rewritten to a
    /// resolved bounding box).
    async fn execute(
        &self,
        query: GeoQuery,
    ) -> Result<(GeoQuery, Vec<RawElement>), TrailError> {
        match &query.area {
            AreaSpec::Named { name } => {
                if let Some(resolved) = self.try_resolve(name).await {
                    let bounded = self.builder.build(resolved, query.types.clone())?;
                    let ql = self.builder.to_overpass_ql(&bounded);
                    let elements = self.gateway.execute(&ql).await?;
                    return Ok((bounded, elements));
                }
                let elements = self.search_named_area(&query).await?;
                Ok((query, elements))
            }
            _ => {
                let ql = self.builder.to_overpass_ql(&query);
                let elements = self.gateway.execute(&ql).await?;
                Ok((query, elements))
            }
        }
    }

    /// Ask the configured resolver for a bounding box. Any failure falls
    /// back to the in-query area strategies.
    async fn try_resolve(&self, name: &str) -> Option<AreaSpec> {
        let resolver = self.resolver.as_ref()?;
        match resolver.resolve(name).await {
            Ok(bounds) => {
                debug!("Resolved '{}' to {:?}", name, bounds);
                Some(AreaSpec::Bounds(bounds))
            }
            Err(ResolveError::NotFound(_)) => None,
            Err(ResolveError::Failed(reason)) => {
                warn!("Area resolution for '{}' failed: {}", name, reason);
                None
            }
        }
    }

    /// Try the named-area strategies most-specific first (park, then
    /// administrative boundary, then plain name match), keeping the first
    /// strategy that yields elements. All-empty is a success with zero
    /// elements; all-failed propagates the last gateway error.
    async fn search_named_area(&self, query: &GeoQuery) -> Result<Vec<RawElement>, TrailError> {
        let mut last_error: Option<GatewayError> = None;
        let mut saw_success = false;

        for strategy in AreaStrategy::CHAIN {
            debug!("Trying {:?} area strategy", strategy);
            let ql = self.builder.to_overpass_ql_with_strategy(query, strategy);

            match self.gateway.execute(&ql).await {
                Ok(elements) if !elements.is_empty() => {
                    debug!("{:?} strategy matched {} element(s)", strategy, elements.len());
                    return Ok(elements);
                }
                Ok(_) => saw_success = true,
                Err(e) => {
                    warn!("{:?} area strategy failed: {}", strategy, e);
                    last_error = Some(e);
                }
            }
        }

        if saw_success {
            return Ok(Vec::new());
        }
        Err(last_error
            .unwrap_or_else(|| GatewayError::Transient("No area strategy attempted".to_string()))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::trails::types::{BoundingBox, GeoPoint};

    fn service() -> TrailService {
        TrailService::new(&OverpassConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_bbox_fails_before_any_network_call() {
        let area = AreaSpec::Bounds(BoundingBox::new(50.0, -74.0, 40.0, -73.9));
        let err = service().search(area, TypeFilter::Any).await.unwrap_err();
        assert!(matches!(err, TrailError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_invalid_radius_fails_before_any_network_call() {
        let area = AreaSpec::Around {
            center: GeoPoint::new(40.78, -73.96),
            radius_meters: -5.0,
        };
        let err = service().search(area, TypeFilter::Any).await.unwrap_err();
        assert!(matches!(err, TrailError::InvalidArgument(_)));
    }

    // Integration tests (require network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_search_bbox_live() {
        let area = AreaSpec::Bounds(BoundingBox::new(40.76, -73.99, 40.80, -73.95));
        let collection = service()
            .search(area, TypeFilter::Any)
            .await
            .expect("live Overpass query failed");
        assert!(!collection.trails.is_empty());
    }

    #[ignore]
    #[tokio::test]
    async fn test_search_named_area_live() {
        let area = AreaSpec::Named {
            name: "Central Park".to_string(),
        };
        let collection = service()
            .search(area, TypeFilter::parse(&["biking".to_string()]).unwrap())
            .await
            .expect("live Overpass query failed");
        assert!(collection.trails.iter().all(|t| !t.id.is_empty()));
    }
}
