pub mod geojson;

// Re-export the essential types
pub use geojson::{Feature, GeoJson, Geometry};
