//! Turn an object in place by dragging across it.
//!
//! Horizontal drag spins the object about its own up axis, vertical drag tilts
//! it about the camera's right axis. When the object has been tilted past
//! upside down its up axis points at the ground, so the spin direction is
//! flipped to keep the surface under the cursor moving with the cursor.

use glam::{Quat, Vec2, Vec3};
use tidewater_config::DragConfig;

/// Maps drag deltas to world-space rotations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotator {
    /// Rotation in degrees per pixel of drag.
    pub degrees_per_pixel: f32,
    /// Tilt the other way for vertical drags.
    pub invert_y: bool,
}

impl Default for DragRotator {
    fn default() -> Self {
        Self::from_config(&DragConfig::default())
    }
}

impl DragRotator {
    /// Build from drag settings.
    pub fn from_config(config: &DragConfig) -> Self {
        Self {
            degrees_per_pixel: config.degrees_per_pixel,
            invert_y: config.invert_y,
        }
    }

    /// Apply a frame's drag `delta` (pixels, +x right, +y down) to `rotation`.
    ///
    /// `camera_right` is the camera's right vector in world space. Returns the
    /// new normalized rotation; a zero delta returns `rotation` unchanged.
    pub fn rotate(&self, rotation: Quat, delta: Vec2, camera_right: Vec3) -> Quat {
        if delta == Vec2::ZERO {
            return rotation;
        }

        let object_up = rotation * Vec3::Y;
        let upright = object_up.dot(Vec3::Y) >= 0.0;
        let yaw_degrees = (if upright { -delta.x } else { delta.x }) * self.degrees_per_pixel;
        let yaw = Quat::from_axis_angle(object_up.normalize_or(Vec3::Y), yaw_degrees.to_radians());

        let pitch_sign = if self.invert_y { -1.0 } else { 1.0 };
        let pitch_degrees = pitch_sign * delta.y * self.degrees_per_pixel;
        let pitch_axis = camera_right.normalize_or_zero();
        let pitch = if pitch_axis == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(pitch_axis, pitch_degrees.to_radians())
        };

        (pitch * yaw * rotation).normalize()
    }
}
