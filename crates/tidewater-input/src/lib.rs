//! Mouse drag tracking and drag-to-rotate for showcased objects.

pub mod drag_rotate;
pub mod mouse;

pub use drag_rotate::DragRotator;
pub use mouse::MouseDrag;
