use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// The slice of a host pointer event the editing helpers consume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Pointer position in client coordinates, relative to the host window
    /// origin
    pub client: Point,
    /// The button involved, if any
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn new(client: Point, button: MouseButton) -> Self {
        Self { client, button }
    }

    /// A left-button event at the given client coordinates
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), MouseButton::Left)
    }
}
