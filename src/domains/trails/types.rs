//! Core data types for the trails domain.
//!
//! These types carry a query from tool arguments through the Overpass
//! gateway and normalization down to the serialized response payload.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::TrailError;

/// A single geographic coordinate (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both coordinates are finite and within valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A geographic bounding box: south/west and north/east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Validate coordinate ranges and corner ordering.
    pub fn validate(&self) -> Result<(), TrailError> {
        for (name, value) in [
            ("south", self.south),
            ("west", self.west),
            ("north", self.north),
            ("east", self.east),
        ] {
            if !value.is_finite() {
                return Err(TrailError::invalid_argument(format!(
                    "Coordinate '{name}' is not a finite number"
                )));
            }
        }
        if !(-90.0..=90.0).contains(&self.south) || !(-90.0..=90.0).contains(&self.north) {
            return Err(TrailError::invalid_argument(
                "Latitude must be between -90 and 90 degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&self.west) || !(-180.0..=180.0).contains(&self.east) {
            return Err(TrailError::invalid_argument(
                "Longitude must be between -180 and 180 degrees",
            ));
        }
        if self.south >= self.north {
            return Err(TrailError::invalid_argument(
                "South latitude must be less than north latitude",
            ));
        }
        if self.west >= self.east {
            return Err(TrailError::invalid_argument(
                "West longitude must be less than east longitude",
            ));
        }
        Ok(())
    }

    /// A degenerate box covering a single point, useful as an accumulator seed.
    pub fn at_point(point: &GeoPoint) -> Self {
        Self {
            south: point.lat,
            west: point.lon,
            north: point.lat,
            east: point.lon,
        }
    }

    /// Grow the box so that it encloses the given point.
    pub fn extend(&mut self, point: &GeoPoint) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lon);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lon);
    }
}

/// The area a query targets: a named place, an explicit bounding box,
/// or a point with a search radius.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AreaSpec {
    Named { name: String },
    Bounds(BoundingBox),
    Around {
        center: GeoPoint,
        radius_meters: f64,
    },
}

/// The kinds of trail this server understands, mapped from OSM tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrailType {
    Hiking,
    Biking,
    Walking,
    Unknown,
}

impl TrailType {
    /// The three requestable types (Unknown is derived, never requested).
    pub const REQUESTABLE: [TrailType; 3] =
        [TrailType::Hiking, TrailType::Biking, TrailType::Walking];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrailType::Hiking => "hiking",
            TrailType::Biking => "biking",
            TrailType::Walking => "walking",
            TrailType::Unknown => "unknown",
        }
    }

    /// OSM `route` relation values that select this trail type.
    pub fn route_values(&self) -> &'static [&'static str] {
        match self {
            TrailType::Hiking => &["hiking", "foot"],
            TrailType::Biking => &["bicycle", "mtb"],
            TrailType::Walking => &["walking", "foot"],
            TrailType::Unknown => &[],
        }
    }

    /// OSM `highway` way values that select this trail type.
    pub fn highway_values(&self) -> &'static [&'static str] {
        match self {
            TrailType::Hiking => &["footway", "path", "track", "bridleway", "steps"],
            TrailType::Biking => &["cycleway", "path", "track"],
            TrailType::Walking => &["footway", "pedestrian", "path", "steps"],
            TrailType::Unknown => &[],
        }
    }
}

/// `access` values excluded from every way clause.
pub const ACCESS_EXCLUDE: [&str; 2] = ["private", "no"];

/// Requested trail-type filter. `Any` emits no type constraint at all,
/// which is a strict superset of OR-ing every known type.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    Any,
    Only(Vec<TrailType>),
}

impl TypeFilter {
    /// Parse requested type names. An empty list or an explicit "any"
    /// means no filter; unknown names are rejected.
    pub fn parse(requested: &[String]) -> Result<Self, TrailError> {
        if requested.is_empty() {
            return Ok(TypeFilter::Any);
        }

        let mut types = Vec::new();
        for name in requested {
            match name.to_lowercase().as_str() {
                "any" => return Ok(TypeFilter::Any),
                "hiking" => types.push(TrailType::Hiking),
                "biking" => types.push(TrailType::Biking),
                "walking" => types.push(TrailType::Walking),
                other => {
                    return Err(TrailError::invalid_argument(format!(
                        "Unknown trail type '{other}'. Use: hiking, biking, walking, or any"
                    )));
                }
            }
        }

        // Preserve request order, drop repeats.
        let mut deduped = Vec::new();
        for t in types {
            if !deduped.contains(&t) {
                deduped.push(t);
            }
        }
        Ok(TypeFilter::Only(deduped))
    }
}

/// An immutable, validated geospatial query.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct GeoQuery {
    pub area: AreaSpec,
    pub types: TypeFilter,
}

/// One element as returned by Overpass. Nothing about its shape is
/// guaranteed by the source: geometry and tags may be missing, and the
/// same element may appear more than once across clauses.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: u64,
    #[serde(default)]
    pub geometry: Vec<GeoPoint>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// The canonical, cleaned trail record.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Trail {
    /// Stable identifier derived from the source element ("way/123").
    pub id: String,
    pub name: String,
    pub trail_type: TrailType,
    /// Ordered path geometry; always at least two distinct points.
    pub geometry: Vec<GeoPoint>,
    /// Great-circle length of the geometry, in meters.
    pub length_meters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// The normalized result of one query execution. Built once per
/// invocation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TrailCollection {
    pub query: GeoQuery,
    pub trails: Vec<Trail>,
    /// Raw elements dropped during normalization (missing geometry etc.).
    pub skipped: usize,
    pub fetched_at: DateTime<Utc>,
}

impl TrailCollection {
    pub fn new(query: GeoQuery, trails: Vec<Trail>, skipped: usize) -> Self {
        Self {
            query,
            trails,
            skipped,
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_valid() {
        let bbox = BoundingBox::new(40.7, -74.0, 40.8, -73.9);
        assert!(bbox.validate().is_ok());
    }

    #[test]
    fn test_bounding_box_inverted_latitude() {
        let bbox = BoundingBox::new(40.8, -74.0, 40.7, -73.9);
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_bounding_box_inverted_longitude() {
        let bbox = BoundingBox::new(40.7, -73.9, 40.8, -74.0);
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_bounding_box_out_of_range() {
        assert!(BoundingBox::new(91.0, -74.0, 92.0, -73.9).validate().is_err());
        assert!(BoundingBox::new(40.7, -181.0, 40.8, -73.9).validate().is_err());
    }

    #[test]
    fn test_bounding_box_nan_rejected() {
        let bbox = BoundingBox::new(f64::NAN, -74.0, 40.8, -73.9);
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_bounding_box_extend() {
        let mut bbox = BoundingBox::at_point(&GeoPoint::new(40.7, -74.0));
        bbox.extend(&GeoPoint::new(40.8, -73.9));
        bbox.extend(&GeoPoint::new(40.6, -74.1));
        assert_eq!(bbox, BoundingBox::new(40.6, -74.1, 40.8, -73.9));
    }

    #[test]
    fn test_type_filter_empty_is_any() {
        assert_eq!(TypeFilter::parse(&[]).unwrap(), TypeFilter::Any);
    }

    #[test]
    fn test_type_filter_any_wins() {
        let requested = vec!["hiking".to_string(), "any".to_string()];
        assert_eq!(TypeFilter::parse(&requested).unwrap(), TypeFilter::Any);
    }

    #[test]
    fn test_type_filter_dedup_preserves_order() {
        let requested = vec![
            "biking".to_string(),
            "hiking".to_string(),
            "biking".to_string(),
        ];
        assert_eq!(
            TypeFilter::parse(&requested).unwrap(),
            TypeFilter::Only(vec![TrailType::Biking, TrailType::Hiking])
        );
    }

    #[test]
    fn test_type_filter_rejects_unknown() {
        let requested = vec!["skiing".to_string()];
        assert!(TypeFilter::parse(&requested).is_err());
    }

    #[test]
    fn test_raw_element_deserializes_partial_payload() {
        let json = r#"{"type": "way", "id": 42}"#;
        let element: RawElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.kind, "way");
        assert_eq!(element.id, 42);
        assert!(element.geometry.is_empty());
        assert!(element.tags.is_empty());
    }
}
