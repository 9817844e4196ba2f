//! Overpass query construction.
//!
//! `QueryBuilder` validates loosely-specified tool arguments into an
//! immutable [`GeoQuery`] and renders it as Overpass QL text. Validation
//! happens here, before any network traffic.

use crate::core::config::OverpassConfig;

use super::error::TrailError;
use super::types::{ACCESS_EXCLUDE, AreaSpec, GeoQuery, TrailType, TypeFilter};

/// How a named area is matched against OSM `area` records.
///
/// The chain runs most-specific first: a park named "Central Park" beats
/// an administrative boundary of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaStrategy {
    /// `leisure=park` areas.
    Park,
    /// `boundary=administrative` areas.
    Administrative,
    /// Any area with a matching name.
    NameOnly,
}

impl AreaStrategy {
    /// Strategies in the order the trail service tries them.
    pub const CHAIN: [AreaStrategy; 3] = [
        AreaStrategy::Park,
        AreaStrategy::Administrative,
        AreaStrategy::NameOnly,
    ];

    fn qualifier(&self) -> &'static str {
        match self {
            AreaStrategy::Park => "[\"leisure\"=\"park\"]",
            AreaStrategy::Administrative => "[\"boundary\"=\"administrative\"]",
            AreaStrategy::NameOnly => "",
        }
    }
}

/// Builds validated geospatial queries and renders them as Overpass QL.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    query_timeout_secs: u32,
    max_query_size_bytes: u64,
    max_radius_meters: f64,
}

impl QueryBuilder {
    pub fn new(config: &OverpassConfig) -> Self {
        Self {
            query_timeout_secs: config.query_timeout_secs,
            max_query_size_bytes: config.max_query_size_bytes,
            max_radius_meters: config.max_radius_meters,
        }
    }

    /// Validate an area specification and type filter into a [`GeoQuery`].
    pub fn build(&self, area: AreaSpec, types: TypeFilter) -> Result<GeoQuery, TrailError> {
        let area = match area {
            AreaSpec::Named { name } => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(TrailError::invalid_argument("Area name cannot be empty"));
                }
                AreaSpec::Named {
                    name: trimmed.to_string(),
                }
            }
            AreaSpec::Bounds(bbox) => {
                bbox.validate()?;
                AreaSpec::Bounds(bbox)
            }
            AreaSpec::Around {
                center,
                radius_meters,
            } => {
                if !center.is_valid() {
                    return Err(TrailError::invalid_argument(
                        "Center coordinates are out of range",
                    ));
                }
                if !radius_meters.is_finite() || radius_meters <= 0.0 {
                    return Err(TrailError::invalid_argument(
                        "Radius must be a positive number of meters",
                    ));
                }
                if radius_meters > self.max_radius_meters {
                    return Err(TrailError::invalid_argument(format!(
                        "Radius {radius_meters} m exceeds the maximum of {} m",
                        self.max_radius_meters
                    )));
                }
                AreaSpec::Around {
                    center,
                    radius_meters,
                }
            }
        };

        Ok(GeoQuery { area, types })
    }

    /// Render a query as Overpass QL, using the name-only strategy for
    /// named areas.
    pub fn to_overpass_ql(&self, query: &GeoQuery) -> String {
        self.to_overpass_ql_with_strategy(query, AreaStrategy::NameOnly)
    }

    /// Render a query as Overpass QL with an explicit named-area strategy.
    /// The strategy is ignored for bounding-box and around forms.
    pub fn to_overpass_ql_with_strategy(&self, query: &GeoQuery, strategy: AreaStrategy) -> String {
        let mut parts = vec![format!(
            "[out:json][timeout:{}][maxsize:{}];",
            self.query_timeout_secs, self.max_query_size_bytes
        )];

        // Named areas select ways/relations through a search area; the
        // other forms constrain each clause spatially.
        let (area_scope, spatial_clause) = match &query.area {
            AreaSpec::Named { name } => {
                parts.push(format!(
                    "area[\"name\"=\"{}\"]{}->.searchArea;",
                    escape_value(name),
                    strategy.qualifier()
                ));
                ("(area.searchArea)".to_string(), String::new())
            }
            AreaSpec::Bounds(b) => (
                String::new(),
                format!("({},{},{},{})", b.south, b.west, b.north, b.east),
            ),
            AreaSpec::Around {
                center,
                radius_meters,
            } => (
                String::new(),
                format!("(around:{},{},{})", radius_meters, center.lat, center.lon),
            ),
        };

        parts.push("(".to_string());
        for clause in self.selection_clauses(&query.types, &area_scope, &spatial_clause) {
            parts.push(clause);
        }
        parts.push(");".to_string());
        parts.push("out geom;".to_string());

        parts.join("\n")
    }

    /// Emit one relation clause per route value and one way clause per
    /// highway value, deduplicated (types share highway classes). An `Any`
    /// filter emits unvalued selectors instead of enumerating every type.
    fn selection_clauses(
        &self,
        types: &TypeFilter,
        area_scope: &str,
        spatial_clause: &str,
    ) -> Vec<String> {
        let access_filters: String = ACCESS_EXCLUDE
            .iter()
            .map(|v| format!("[\"access\"!=\"{v}\"]"))
            .collect();

        let mut clauses: Vec<String> = Vec::new();
        let push_unique = |clause: String, clauses: &mut Vec<String>| {
            if !clauses.contains(&clause) {
                clauses.push(clause);
            }
        };

        match types {
            TypeFilter::Any => {
                clauses.push(format!(
                    "  relation{area_scope}[\"route\"]{spatial_clause};"
                ));
                clauses.push(format!(
                    "  way{area_scope}[\"highway\"]{access_filters}{spatial_clause};"
                ));
            }
            TypeFilter::Only(requested) => {
                for trail_type in requested {
                    for route in trail_type.route_values() {
                        push_unique(
                            format!(
                                "  relation{area_scope}[\"route\"=\"{route}\"]{spatial_clause};"
                            ),
                            &mut clauses,
                        );
                    }
                    for highway in trail_type.highway_values() {
                        push_unique(
                            format!(
                                "  way{area_scope}[\"highway\"=\"{highway}\"]{access_filters}{spatial_clause};"
                            ),
                            &mut clauses,
                        );
                    }
                }
            }
        }

        clauses
    }
}

/// Escape a tag value for inclusion in a quoted Overpass QL string.
fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
