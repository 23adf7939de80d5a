//! Shared trait abstractions
//!
//! The projection seam lives here so the editing utilities never depend on a
//! concrete map engine.

use crate::core::geo::{LatLng, Point};

/// Conversion between geographic coordinates and container-relative pixel
/// coordinates for the current map view.
///
/// Implementations must be numerically consistent: round-tripping a point
/// through [`project`](Projector::project) then
/// [`unproject`](Projector::unproject) returns the same point up to
/// floating-point precision.
pub trait Projector {
    /// Projects a geographic coordinate to container pixels.
    fn project(&self, lat_lng: &LatLng) -> Point;

    /// Unprojects container pixels back to a geographic coordinate.
    fn unproject(&self, point: &Point) -> LatLng;
}
