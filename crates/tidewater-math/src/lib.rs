//! Interpolation primitives shared by Tidewater crates: the [`Blend`] trait,
//! clamping helpers, and serializable easing curves.

pub mod blend;
pub mod easing;

pub use blend::{Blend, clamp01};
pub use easing::{CurveError, EasingCurve, Keyframe};
