use crate::core::geo::{LatLng, LatLngBounds};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection(Vec<GeoJsonFeature>),
    Geometry(GeoJsonGeometry),
}

impl GeoJson {
    /// Parses a GeoJSON document. Accepts a feature collection, a single
    /// feature, or a bare geometry object.
    pub fn parse(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| MapError::ParseError(format!("invalid GeoJSON: {e}")))?;
        Self::from_value(value)
    }

    fn from_value(value: serde_json::Value) -> Result<Self> {
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some("Feature") => {
                let feature: GeoJsonFeature = serde_json::from_value(value)
                    .map_err(|e| MapError::ParseError(format!("invalid feature: {e}")))?;
                Ok(GeoJson::Feature(feature))
            }
            Some("FeatureCollection") => {
                let features = value
                    .get("features")
                    .cloned()
                    .ok_or_else(|| MapError::ParseError("missing \"features\" member".into()))?;
                let features: Vec<GeoJsonFeature> = serde_json::from_value(features)
                    .map_err(|e| MapError::ParseError(format!("invalid features: {e}")))?;
                Ok(GeoJson::FeatureCollection(features))
            }
            Some(_) => {
                let geometry: GeoJsonGeometry = serde_json::from_value(value)
                    .map_err(|e| MapError::ParseError(format!("invalid geometry: {e}")))?;
                Ok(GeoJson::Geometry(geometry))
            }
            None => Err(MapError::ParseError("missing \"type\" member".into())),
        }
    }

    /// Gets all features in the document. A bare geometry has none.
    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection(features) => features.iter().collect(),
            GeoJson::Geometry(_) => Vec::new(),
        }
    }

    /// Gets the bounding box of every geometry in the document
    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            GeoJson::Geometry(geometry) => geometry.bounds(),
            _ => {
                let mut bounds: Option<LatLngBounds> = None;
                for feature in self.features() {
                    if let Some(geom_bounds) = feature.geometry.as_ref().and_then(|g| g.bounds()) {
                        if let Some(ref mut b) = bounds {
                            b.extend(&geom_bounds.south_west);
                            b.extend(&geom_bounds.north_east);
                        } else {
                            bounds = Some(geom_bounds);
                        }
                    }
                }
                bounds
            }
        }
    }
}

impl GeoJsonGeometry {
    /// Gets the bounding box of the geometry
    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            GeoJsonGeometry::Point { coordinates } => {
                let point = LatLng::new(coordinates[1], coordinates[0]);
                Some(LatLngBounds::new(point, point))
            }
            GeoJsonGeometry::LineString { coordinates } => Self::coords_bounds(coordinates),
            GeoJsonGeometry::Polygon { coordinates } => coordinates
                .first()
                .and_then(|exterior| Self::coords_bounds(exterior)),
            GeoJsonGeometry::MultiPoint { coordinates } => Self::coords_bounds(coordinates),
            GeoJsonGeometry::MultiLineString { coordinates } => {
                let mut all_coords = Vec::new();
                for line in coordinates {
                    all_coords.extend(line);
                }
                Self::coords_bounds(&all_coords)
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => {
                let mut all_coords = Vec::new();
                for polygon in coordinates {
                    if let Some(exterior) = polygon.first() {
                        all_coords.extend(exterior);
                    }
                }
                Self::coords_bounds(&all_coords)
            }
            GeoJsonGeometry::GeometryCollection { geometries } => {
                let mut bounds: Option<LatLngBounds> = None;
                for geom in geometries {
                    if let Some(geom_bounds) = geom.bounds() {
                        if let Some(ref mut b) = bounds {
                            b.extend(&geom_bounds.south_west);
                            b.extend(&geom_bounds.north_east);
                        } else {
                            bounds = Some(geom_bounds);
                        }
                    }
                }
                bounds
            }
        }
    }

    fn coords_bounds(coordinates: &[[f64; 2]]) -> Option<LatLngBounds> {
        if coordinates.is_empty() {
            return None;
        }

        let first = LatLng::new(coordinates[0][1], coordinates[0][0]);
        let mut bounds = LatLngBounds::new(first, first);

        for coord in coordinates.iter().skip(1) {
            bounds.extend(&LatLng::new(coord[1], coord[0]));
        }

        Some(bounds)
    }
}
