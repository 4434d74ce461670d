//! Linear interpolation over arbitrary value types.

use glam::{Vec2, Vec3};

/// Clamp `t` into `[0.0, 1.0]`. NaN maps to `0.0`.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// A value that can be linearly interpolated between two endpoints.
///
/// `lerp(a, b, 0.0)` must return `a` and `lerp(a, b, 1.0)` must return `b`.
/// Factors outside `[0, 1]` extrapolate; callers clamp when they need to.
pub trait Blend: Copy {
    /// Interpolate from `self` toward `other` by factor `t`.
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Blend for Vec2 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        Vec2::lerp(self, other, t)
    }
}

impl Blend for Vec3 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        Vec3::lerp(self, other, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }

    #[test]
    fn test_f32_lerp_endpoints() {
        assert_eq!(Blend::lerp(10.0_f32, 20.0, 0.0), 10.0);
        assert_eq!(Blend::lerp(10.0_f32, 20.0, 1.0), 20.0);
        assert!((Blend::lerp(10.0_f32, 20.0, 0.5) - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_vec3_lerp_midpoint() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 4.0, -6.0);
        let mid = Blend::lerp(a, b, 0.5);
        assert!((mid - Vec3::new(1.0, 2.0, -3.0)).length() < 1e-6);
    }
}
