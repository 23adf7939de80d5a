pub mod drag;
pub mod translate;

// Re-export the essential types
pub use drag::DragSession;
pub use translate::translate;
