//! Templated resource URI handling.
//!
//! Parses `trails://` URIs into area specifications so that templated
//! resources can run the trail pipeline on read.

use super::error::ResourceError;
use crate::domains::trails::{AreaSpec, BoundingBox, GeoPoint};

const BBOX_PREFIX: &str = "trails://bbox/";
const AREA_PREFIX: &str = "trails://area/";

/// Parse a templated `trails://` URI into an area specification.
///
/// Returns `None` for URIs outside the `trails://` template space, so the
/// caller can fall through to static resource lookup.
pub fn parse_trail_uri(uri: &str) -> Option<Result<AreaSpec, ResourceError>> {
    if let Some(rest) = uri.strip_prefix(BBOX_PREFIX) {
        return Some(parse_bbox(uri, rest));
    }
    if let Some(rest) = uri.strip_prefix(AREA_PREFIX) {
        return Some(parse_named(uri, rest));
    }
    None
}

fn parse_bbox(uri: &str, rest: &str) -> Result<AreaSpec, ResourceError> {
    let parts: Vec<&str> = rest.split('/').collect();
    if parts.len() != 4 {
        return Err(ResourceError::invalid_uri(format!(
            "Expected trails://bbox/{{south}}/{{west}}/{{north}}/{{east}}, got: {}",
            uri
        )));
    }

    let mut coords = [0.0f64; 4];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| {
            ResourceError::invalid_uri(format!("Invalid coordinate '{}' in: {}", part, uri))
        })?;
    }

    Ok(AreaSpec::Bounds(BoundingBox {
        south: coords[0],
        west: coords[1],
        north: coords[2],
        east: coords[3],
    }))
}

fn parse_named(uri: &str, rest: &str) -> Result<AreaSpec, ResourceError> {
    let name = percent_decode(rest);
    let name = name.trim();
    if name.is_empty() {
        return Err(ResourceError::invalid_uri(format!(
            "Missing area name in: {}",
            uri
        )));
    }
    Ok(AreaSpec::Named {
        name: name.to_string(),
    })
}

/// Decode `%XX` escapes in a URI segment. Invalid escapes pass through as-is.
fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 3 <= bytes.len() {
            // Stay on the byte slice: slicing the str here could land
            // mid-character when a multibyte sequence follows the '%'.
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Approximate center of a parsed area, for logging.
pub fn area_center(area: &AreaSpec) -> Option<GeoPoint> {
    match area {
        AreaSpec::Bounds(bbox) => Some(GeoPoint::new(
            (bbox.south + bbox.north) / 2.0,
            (bbox.west + bbox.east) / 2.0,
        )),
        AreaSpec::Around { center, .. } => Some(*center),
        AreaSpec::Named { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox_uri() {
        let area = parse_trail_uri("trails://bbox/40.7/-74.0/40.8/-73.9")
            .unwrap()
            .unwrap();
        match area {
            AreaSpec::Bounds(bbox) => {
                assert_eq!(bbox.south, 40.7);
                assert_eq!(bbox.west, -74.0);
                assert_eq!(bbox.north, 40.8);
                assert_eq!(bbox.east, -73.9);
            }
            other => panic!("Expected bounds, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bbox_wrong_arity() {
        let result = parse_trail_uri("trails://bbox/40.7/-74.0/40.8").unwrap();
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }

    #[test]
    fn test_parse_bbox_bad_coordinate() {
        let result = parse_trail_uri("trails://bbox/40.7/-74.0/north/-73.9").unwrap();
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }

    #[test]
    fn test_parse_area_uri() {
        let area = parse_trail_uri("trails://area/Central%20Park")
            .unwrap()
            .unwrap();
        assert!(matches!(area, AreaSpec::Named { ref name } if name == "Central Park"));
    }

    #[test]
    fn test_parse_area_plain_name() {
        let area = parse_trail_uri("trails://area/Yosemite").unwrap().unwrap();
        assert!(matches!(area, AreaSpec::Named { ref name } if name == "Yosemite"));
    }

    #[test]
    fn test_parse_area_empty_name() {
        let result = parse_trail_uri("trails://area/").unwrap();
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
    }

    #[test]
    fn test_non_trail_uri_passes_through() {
        assert!(parse_trail_uri("mcp://server/info").is_none());
        assert!(parse_trail_uri("trails://types").is_none());
    }

    #[test]
    fn test_percent_decode_invalid_escape_preserved() {
        let area = parse_trail_uri("trails://area/50%ZZoff").unwrap().unwrap();
        assert!(matches!(area, AreaSpec::Named { ref name } if name == "50%ZZoff"));
    }

    #[test]
    fn test_percent_decode_multibyte_after_percent() {
        // A '%' directly followed by a multibyte character must pass
        // through untouched rather than panic on a mid-character slice.
        let area = parse_trail_uri("trails://area/%日trail").unwrap().unwrap();
        assert!(matches!(area, AreaSpec::Named { ref name } if name == "%日trail"));
    }

    #[test]
    fn test_percent_decode_utf8_escapes() {
        // "München" with ü percent-encoded as its two UTF-8 bytes.
        let area = parse_trail_uri("trails://area/M%C3%BCnchen").unwrap().unwrap();
        assert!(matches!(area, AreaSpec::Named { ref name } if name == "München"));
    }

    #[test]
    fn test_area_center() {
        let bbox = AreaSpec::Bounds(BoundingBox::new(40.0, -74.0, 41.0, -73.0));
        let center = area_center(&bbox).unwrap();
        assert!((center.lat - 40.5).abs() < 1e-9);
        assert!((center.lon - (-73.5)).abs() < 1e-9);
        assert!(area_center(&AreaSpec::Named { name: "x".into() }).is_none());
    }
}
