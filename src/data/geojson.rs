use crate::{DrawError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GeoJSON geometry types
///
/// Vertices are `[longitude, latitude]` pairs, nested per the GeoJSON
/// structure: a flat sequence for line-like types, a sequence of linear
/// rings for polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
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
}

impl Geometry {
    /// Gets the GeoJSON type name of this geometry
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: Option<serde_json::Value>,
    pub geometry: Option<Geometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl Feature {
    /// Creates a feature wrapping a geometry, with no id or properties
    pub fn from_geometry(geometry: Geometry) -> Self {
        Self {
            id: None,
            geometry: Some(geometry),
            properties: None,
        }
    }

    /// Parses a feature from a raw GeoJSON string
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        let feature: Feature = serde_json::from_str(geojson_str)
            .map_err(DrawError::Serialization)?;
        Ok(feature)
    }
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(Feature),
    FeatureCollection { features: Vec<Feature> },
}

impl GeoJson {
    /// Parses a root GeoJSON object from a raw string
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        let data: GeoJson = serde_json::from_str(geojson_str)
            .map_err(DrawError::Serialization)?;
        Ok(data)
    }

    /// Gets all features in the object
    pub fn features(&self) -> Vec<&Feature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features.iter().collect(),
        }
    }
}
