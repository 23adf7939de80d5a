pub mod bounds;
pub mod geo;
pub mod viewport;

// Re-export the essential types
pub use bounds::Bounds;
pub use geo::{LatLng, Point};
pub use viewport::Viewport;
