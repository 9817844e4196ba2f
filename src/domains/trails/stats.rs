//! Summary statistics over a normalized trail collection.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use super::types::{BoundingBox, Trail, TrailType};

/// Per-type trail counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct TypeCounts {
    pub hiking: usize,
    pub biking: usize,
    pub walking: usize,
    pub unknown: usize,
}

/// Read-only summary of a trail collection. Recomputed on demand,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TrailStats {
    pub total: usize,
    pub by_type: TypeCounts,
    pub total_length_meters: f64,
    /// Minimal box enclosing every geometry point; absent when the
    /// collection is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
    /// Histogram of `surface` tag values, where present.
    pub surfaces: BTreeMap<String, usize>,
    /// Histogram of `difficulty` tag values, where present.
    pub difficulties: BTreeMap<String, usize>,
}

/// Computes [`TrailStats`] from a trail slice. Pure, no side effects.
pub struct StatsAggregator;

impl StatsAggregator {
    /// Aggregate a collection. An empty input yields zero-valued stats,
    /// not an error.
    pub fn aggregate(trails: &[Trail]) -> TrailStats {
        let mut by_type = TypeCounts::default();
        let mut total_length_meters = 0.0;
        let mut bounds: Option<BoundingBox> = None;
        let mut surfaces = BTreeMap::new();
        let mut difficulties = BTreeMap::new();

        for trail in trails {
            match trail.trail_type {
                TrailType::Hiking => by_type.hiking += 1,
                TrailType::Biking => by_type.biking += 1,
                TrailType::Walking => by_type.walking += 1,
                TrailType::Unknown => by_type.unknown += 1,
            }

            total_length_meters += trail.length_meters;

            for point in &trail.geometry {
                match bounds.as_mut() {
                    Some(b) => b.extend(point),
                    None => bounds = Some(BoundingBox::at_point(point)),
                }
            }

            if let Some(surface) = &trail.surface {
                *surfaces.entry(surface.clone()).or_insert(0) += 1;
            }
            if let Some(difficulty) = &trail.difficulty {
                *difficulties.entry(difficulty.clone()).or_insert(0) += 1;
            }
        }

        TrailStats {
            total: trails.len(),
            by_type,
            total_length_meters,
            bounds,
            surfaces,
            difficulties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::trails::types::GeoPoint;

    fn trail(id: &str, trail_type: TrailType, length: f64, lat: f64) -> Trail {
        Trail {
            id: id.to_string(),
            name: "Test".to_string(),
            trail_type,
            geometry: vec![GeoPoint::new(lat, -74.0), GeoPoint::new(lat + 0.01, -73.9)],
            length_meters: length,
            surface: None,
            difficulty: None,
        }
    }

    #[test]
    fn test_empty_collection_yields_zero_stats() {
        let stats = StatsAggregator::aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_type, TypeCounts::default());
        assert_eq!(stats.total_length_meters, 0.0);
        assert!(stats.bounds.is_none());
        assert!(stats.surfaces.is_empty());
    }

    #[test]
    fn test_counts_by_type() {
        let trails = vec![
            trail("way/1", TrailType::Hiking, 100.0, 40.7),
            trail("way/2", TrailType::Hiking, 200.0, 40.7),
            trail("way/3", TrailType::Biking, 300.0, 40.7),
            trail("way/4", TrailType::Unknown, 50.0, 40.7),
        ];
        let stats = StatsAggregator::aggregate(&trails);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_type.hiking, 2);
        assert_eq!(stats.by_type.biking, 1);
        assert_eq!(stats.by_type.walking, 0);
        assert_eq!(stats.by_type.unknown, 1);
        assert_eq!(stats.total_length_meters, 650.0);
    }

    #[test]
    fn test_bounds_enclose_all_geometry() {
        let trails = vec![
            trail("way/1", TrailType::Hiking, 100.0, 40.7),
            trail("way/2", TrailType::Hiking, 100.0, 41.5),
        ];
        let stats = StatsAggregator::aggregate(&trails);
        let bounds = stats.bounds.unwrap();
        assert_eq!(bounds.south, 40.7);
        assert_eq!(bounds.north, 41.51);
        assert_eq!(bounds.west, -74.0);
        assert_eq!(bounds.east, -73.9);
    }

    #[test]
    fn test_surface_histogram() {
        let mut a = trail("way/1", TrailType::Hiking, 100.0, 40.7);
        a.surface = Some("gravel".to_string());
        let mut b = trail("way/2", TrailType::Hiking, 100.0, 40.7);
        b.surface = Some("gravel".to_string());
        let mut c = trail("way/3", TrailType::Hiking, 100.0, 40.7);
        c.surface = Some("paved".to_string());
        c.difficulty = Some("easy".to_string());

        let stats = StatsAggregator::aggregate(&[a, b, c]);
        assert_eq!(stats.surfaces.get("gravel"), Some(&2));
        assert_eq!(stats.surfaces.get("paved"), Some(&1));
        assert_eq!(stats.difficulties.get("easy"), Some(&1));
    }

    #[test]
    fn test_aggregate_is_pure() {
        let trails = vec![trail("way/1", TrailType::Walking, 42.0, 40.7)];
        let first = StatsAggregator::aggregate(&trails);
        let second = StatsAggregator::aggregate(&trails);
        assert_eq!(first, second);
    }
}
