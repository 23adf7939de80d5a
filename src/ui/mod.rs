pub mod element;
pub mod style;

pub use element::{Element, ElementId, OverlaySurface};

pub use style::{HostCapabilities, StandardHost, StyleSupport, SELECT_PROPS, TRANSFORM_PROPS};
