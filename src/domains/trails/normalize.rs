//! Normalization of raw Overpass elements into canonical trails.
//!
//! The normalizer never fails a whole batch: elements without usable
//! geometry are skipped and counted, duplicates are dropped first-wins,
//! and the output order is exactly the input order of the kept elements.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::types::{GeoPoint, RawElement, Trail, TrailType};

/// Mean Earth radius in meters, for great-circle distances.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

const DEFAULT_NAME: &str = "Unnamed Trail";

/// Result of normalizing one batch of raw elements.
#[derive(Debug, Clone)]
pub struct NormalizedTrails {
    pub trails: Vec<Trail>,
    /// Elements dropped for lacking at least two distinct geometry points.
    pub skipped: usize,
}

/// Maps raw geographic elements into canonical [`Trail`] records.
pub struct TrailNormalizer;

impl TrailNormalizer {
    /// Normalize a batch. Deterministic: the same input order always
    /// produces the same output order (no re-sorting).
    pub fn normalize(elements: Vec<RawElement>) -> NormalizedTrails {
        let mut trails = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut skipped = 0usize;

        for element in elements {
            if !has_usable_geometry(&element.geometry) {
                skipped += 1;
                continue;
            }

            let id = format!("{}/{}", element.kind, element.id);
            if !seen.insert(id.clone()) {
                continue;
            }

            let name = element
                .tags
                .get("name")
                .filter(|n| !n.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| DEFAULT_NAME.to_string());

            trails.push(Trail {
                id,
                name,
                trail_type: Self::classify(&element.tags),
                length_meters: path_length_meters(&element.geometry),
                geometry: element.geometry,
                surface: element.tags.get("surface").cloned(),
                difficulty: element.tags.get("difficulty").cloned(),
            });
        }

        if skipped > 0 {
            debug!("Normalization skipped {} element(s) without geometry", skipped);
        }

        NormalizedTrails { trails, skipped }
    }

    /// Derive the trail type from OSM tags.
    ///
    /// Frozen precedence: explicit `route` tag, then `highway`
    /// classification (with a bicycle=yes tiebreak on the ambiguous
    /// path/track/bridleway classes), then access hints, then Unknown.
    pub fn classify(tags: &HashMap<String, String>) -> TrailType {
        let tag = |key: &str| tags.get(key).map(String::as_str).unwrap_or("");

        match tag("route") {
            "hiking" | "foot" => return TrailType::Hiking,
            "bicycle" | "mtb" => return TrailType::Biking,
            "walking" => return TrailType::Walking,
            _ => {}
        }

        match tag("highway") {
            "cycleway" => return TrailType::Biking,
            "footway" | "pedestrian" | "steps" => return TrailType::Walking,
            "path" | "track" | "bridleway" => {
                return if tag("bicycle") == "yes" {
                    TrailType::Biking
                } else {
                    TrailType::Hiking
                };
            }
            _ => {}
        }

        if tag("bicycle") == "yes" {
            TrailType::Biking
        } else if tag("foot") == "yes" {
            TrailType::Hiking
        } else {
            TrailType::Unknown
        }
    }
}

/// A geometry is usable if it has at least two distinct points.
fn has_usable_geometry(geometry: &[GeoPoint]) -> bool {
    geometry.len() >= 2 && geometry.iter().any(|p| *p != geometry[0])
}

/// Sum of great-circle distances between consecutive geometry points.
pub fn path_length_meters(geometry: &[GeoPoint]) -> f64 {
    geometry
        .windows(2)
        .map(|pair| haversine_meters(&pair[0], &pair[1]))
        .sum()
}

/// Great-circle distance between two points via the haversine formula.
/// Planar distance is wrong at any meaningful scale on a sphere.
pub fn haversine_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair past 1.0 for near-antipodal points,
    // which would send asin to NaN.
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: &str, id: u64, geometry: Vec<GeoPoint>, tags: &[(&str, &str)]) -> RawElement {
        RawElement {
            kind: kind.to_string(),
            id,
            geometry,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn two_points() -> Vec<GeoPoint> {
        vec![GeoPoint::new(40.7, -74.0), GeoPoint::new(40.701, -74.0)]
    }

    #[test]
    fn test_classify_route_tag_wins() {
        let cases = [
            (vec![("route", "hiking")], TrailType::Hiking),
            (vec![("route", "foot")], TrailType::Hiking),
            (vec![("route", "bicycle")], TrailType::Biking),
            (vec![("route", "mtb")], TrailType::Biking),
            (vec![("route", "walking")], TrailType::Walking),
            // route beats a contradicting highway tag
            (
                vec![("route", "bicycle"), ("highway", "footway")],
                TrailType::Biking,
            ),
        ];
        for (tags, expected) in cases {
            let tags = tags
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            assert_eq!(TrailNormalizer::classify(&tags), expected);
        }
    }

    #[test]
    fn test_classify_highway_fallback() {
        let cases = [
            (vec![("highway", "cycleway")], TrailType::Biking),
            (vec![("highway", "footway")], TrailType::Walking),
            (vec![("highway", "pedestrian")], TrailType::Walking),
            (vec![("highway", "steps")], TrailType::Walking),
            (vec![("highway", "path")], TrailType::Hiking),
            (vec![("highway", "track")], TrailType::Hiking),
            (
                vec![("highway", "path"), ("bicycle", "yes")],
                TrailType::Biking,
            ),
        ];
        for (tags, expected) in cases {
            let tags = tags
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            assert_eq!(TrailNormalizer::classify(&tags), expected);
        }
    }

    #[test]
    fn test_classify_access_hints_and_unknown() {
        let bike: HashMap<_, _> = [("bicycle".to_string(), "yes".to_string())].into();
        assert_eq!(TrailNormalizer::classify(&bike), TrailType::Biking);

        let foot: HashMap<_, _> = [("foot".to_string(), "yes".to_string())].into();
        assert_eq!(TrailNormalizer::classify(&foot), TrailType::Hiking);

        assert_eq!(TrailNormalizer::classify(&HashMap::new()), TrailType::Unknown);
    }

    #[test]
    fn test_single_point_geometry_skipped_and_counted() {
        let result = TrailNormalizer::normalize(vec![element(
            "way",
            1,
            vec![GeoPoint::new(40.7, -74.0)],
            &[("highway", "path")],
        )]);
        assert!(result.trails.is_empty());
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_degenerate_repeated_point_skipped() {
        let p = GeoPoint::new(40.7, -74.0);
        let result = TrailNormalizer::normalize(vec![element("way", 1, vec![p, p], &[])]);
        assert!(result.trails.is_empty());
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_one_bad_element_does_not_fail_batch() {
        let result = TrailNormalizer::normalize(vec![
            element("way", 1, vec![], &[]),
            element("way", 2, two_points(), &[("highway", "path")]),
        ]);
        assert_eq!(result.trails.len(), 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.trails[0].id, "way/2");
    }

    #[test]
    fn test_duplicate_id_first_occurrence_wins() {
        let result = TrailNormalizer::normalize(vec![
            element("way", 7, two_points(), &[("name", "First")]),
            element("way", 7, two_points(), &[("name", "Second")]),
        ]);
        assert_eq!(result.trails.len(), 1);
        assert_eq!(result.trails[0].name, "First");
        // A pure duplicate is dropped, not counted as a skip.
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_same_id_different_kind_not_a_duplicate() {
        let result = TrailNormalizer::normalize(vec![
            element("way", 7, two_points(), &[]),
            element("relation", 7, two_points(), &[]),
        ]);
        assert_eq!(result.trails.len(), 2);
        assert_eq!(result.trails[0].id, "way/7");
        assert_eq!(result.trails[1].id, "relation/7");
    }

    #[test]
    fn test_output_order_follows_input_order() {
        let ids = [5u64, 3, 9, 1];
        let elements: Vec<_> = ids
            .iter()
            .map(|id| element("way", *id, two_points(), &[]))
            .collect();

        let result = TrailNormalizer::normalize(elements);
        let got: Vec<_> = result.trails.iter().map(|t| t.id.clone()).collect();
        assert_eq!(got, vec!["way/5", "way/3", "way/9", "way/1"]);
    }

    #[test]
    fn test_missing_name_defaults() {
        let result = TrailNormalizer::normalize(vec![element("way", 1, two_points(), &[])]);
        assert_eq!(result.trails[0].name, "Unnamed Trail");
    }

    #[test]
    fn test_surface_and_difficulty_passthrough() {
        let result = TrailNormalizer::normalize(vec![element(
            "way",
            1,
            two_points(),
            &[("surface", "gravel"), ("difficulty", "easy")],
        )]);
        assert_eq!(result.trails[0].surface.as_deref(), Some("gravel"));
        assert_eq!(result.trails[0].difficulty.as_deref(), Some("easy"));
    }

    #[test]
    fn test_haversine_known_distance() {
        // One thousandth of a degree of latitude is roughly 111.2 m.
        let a = GeoPoint::new(40.7, -74.0);
        let b = GeoPoint::new(40.701, -74.0);
        let d = haversine_meters(&a, &b);
        assert!((d - 111.2).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = GeoPoint::new(40.7, -74.0);
        assert_eq!(haversine_meters(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_antipodal_is_finite() {
        // Exactly opposite points maximize h; rounding must not push the
        // result into NaN.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = haversine_meters(&a, &b);
        assert!(d.is_finite());
        // Half the Earth's circumference, within a kilometer.
        assert!((d - std::f64::consts::PI * 6_371_000.0).abs() < 1_000.0);

        let c = GeoPoint::new(-0.000001, 179.999999);
        assert!(haversine_meters(&a, &c).is_finite());
    }

    #[test]
    fn test_path_length_sums_segments() {
        let points = vec![
            GeoPoint::new(40.7, -74.0),
            GeoPoint::new(40.701, -74.0),
            GeoPoint::new(40.702, -74.0),
        ];
        let total = path_length_meters(&points);
        let first = haversine_meters(&points[0], &points[1]);
        let second = haversine_meters(&points[1], &points[2]);
        assert!((total - (first + second)).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_idempotent_ordering() {
        let elements: Vec<_> = (0..4)
            .map(|id| element("way", id, two_points(), &[("highway", "path")]))
            .collect();
        let first = TrailNormalizer::normalize(elements.clone());
        let second = TrailNormalizer::normalize(elements);
        assert_eq!(first.trails, second.trails);
    }
}
