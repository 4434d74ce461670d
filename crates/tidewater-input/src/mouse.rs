//! Frame-coherent drag tracker.
//!
//! [`MouseDrag`] accumulates cursor movement while the drag button is held
//! and exposes it once per frame.
//!
//! # Usage
//!
//! 1. Forward cursor and button events during event collection.
//! 2. Read [`delta`](MouseDrag::delta) in the frame update.
//! 3. Call [`end_frame`](MouseDrag::end_frame) afterwards.

use glam::Vec2;

/// Drag state for a single mouse button.
#[derive(Debug, Clone, Default)]
pub struct MouseDrag {
    position: Option<Vec2>,
    delta: Vec2,
    pressed: bool,
    just_pressed: bool,
}

impl MouseDrag {
    /// Creates an idle tracker with no known cursor position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a cursor move in window pixels.
    ///
    /// Movement only counts while the button is held. The first sample after
    /// the cursor position becomes known produces no delta.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let new_pos = Vec2::new(x, y);
        if self.pressed
            && let Some(prev) = self.position
        {
            self.delta += new_pos - prev;
        }
        self.position = Some(new_pos);
    }

    /// Process a press or release of the drag button.
    pub fn on_button(&mut self, pressed: bool) {
        if pressed && !self.pressed {
            self.just_pressed = true;
        }
        self.pressed = pressed;
    }

    /// Movement accumulated this frame while dragging, in pixels.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Whether the drag button is currently held.
    pub fn is_dragging(&self) -> bool {
        self.pressed
    }

    /// Whether the drag started this frame.
    pub fn just_started(&self) -> bool {
        self.just_pressed
    }

    /// Last known cursor position.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Clear per-frame transients.
    pub fn end_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.just_pressed = false;
    }
}
