//! Prelude module for common mapdraw types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapdraw::prelude::*;`

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

pub use crate::{DrawError, Error, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
