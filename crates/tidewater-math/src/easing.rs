//! Easing curves mapping normalized tween progress to an interpolation factor.
//!
//! Named curves cover the common shapes. [`EasingCurve::Keyframes`] gives
//! authored control over the response: a piecewise-linear curve through
//! `(time, value)` keys, held flat before the first key and after the last.

use serde::{Deserialize, Serialize};

use crate::blend::{Blend, clamp01};

/// A single `(time, value)` point on a keyframed curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Normalized progress at which this key applies.
    pub time: f32,
    /// Curve output at `time`.
    pub value: f32,
}

impl Keyframe {
    /// Create a keyframe.
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Problems that make a curve unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// A keyframed curve has no keys.
    #[error("keyframed curve has no keys")]
    Empty,

    /// Key times are not in non-decreasing order.
    #[error("keyframe {index} is earlier than the key before it")]
    Unordered {
        /// Index of the offending key.
        index: usize,
    },

    /// A key has a NaN or infinite time or value.
    #[error("keyframe {index} is not finite")]
    NonFinite {
        /// Index of the offending key.
        index: usize,
    },
}

/// Shape of a tween's response over its duration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum EasingCurve {
    /// Constant speed.
    #[default]
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end.
    EaseOut,
    /// Slow start, fast middle, slow end.
    EaseInOut,
    /// Hermite smooth step.
    SmoothStep,
    /// Piecewise-linear curve through authored keys.
    Keyframes(Vec<Keyframe>),
}

impl EasingCurve {
    /// Map a progress value to an eased factor. `t` is clamped to `[0, 1]`.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = clamp01(t);
        match self {
            EasingCurve::Linear => t,
            EasingCurve::EaseIn => t * t,
            EasingCurve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingCurve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingCurve::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingCurve::Keyframes(keys) => evaluate_keys(keys, t),
        }
    }

    /// Check that the curve can be evaluated meaningfully.
    ///
    /// Named curves are always valid. Keyframed curves need at least one key,
    /// finite values, and non-decreasing times.
    pub fn validate(&self) -> Result<(), CurveError> {
        let EasingCurve::Keyframes(keys) = self else {
            return Ok(());
        };
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, key) in keys.iter().enumerate() {
            if !key.time.is_finite() || !key.value.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if index > 0 && key.time < keys[index - 1].time {
                return Err(CurveError::Unordered { index });
            }
        }
        Ok(())
    }
}

fn evaluate_keys(keys: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return t;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.time {
            let span = b.time - a.time;
            if span <= f32::EPSILON {
                return b.value;
            }
            return Blend::lerp(a.value, b.value, (t - a.time) / span);
        }
    }
    last.value
}
