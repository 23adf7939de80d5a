//! # Mapdraw
//!
//! Geometry-editing utilities for interactive Rust maps.
//!
//! This library provides the utility layer of a map-editing plugin:
//! translating GeoJSON features by a pixel-space drag delta through a
//! projection round-trip, plus the overlay-surface helpers an editor
//! needs to manage its handles and controls above the map.

pub mod core;
pub mod data;
pub mod edit;
pub mod input;
pub mod prelude;
pub mod traits;
pub mod ui;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    geo::{LatLng, Point},
    viewport::Viewport,
};

pub use crate::data::geojson::{Feature, GeoJson, Geometry};

pub use crate::edit::{drag::DragSession, translate::translate};

pub use crate::input::events::{MouseButton, PointerEvent};

pub use crate::traits::Projector;

pub use crate::ui::{
    element::{Element, ElementId, OverlaySurface},
    style::{HostCapabilities, StandardHost, StyleSupport},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Element error: {0}")]
    Element(String),
}

/// Error type alias for convenience
pub type Error = DrawError;
