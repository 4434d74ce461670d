//! Configuration errors rejected when a controller is built.

use std::fmt;

use tidewater_math::CurveError;

/// The tweened output a setting belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Fog start/end/density.
    Fog,
    /// Surface and underwater volume weights.
    Volumes,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Fog => f.write_str("fog"),
            Channel::Volumes => f.write_str("volume blend"),
        }
    }
}

/// Settings that would leave the controller in an inconsistent state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnderwaterConfigError {
    /// `exit_y` must sit strictly above `enter_y`.
    #[error("exit_y ({exit_y}) must be greater than enter_y ({enter_y})")]
    InvertedThresholds {
        /// Configured enter height.
        enter_y: f32,
        /// Configured exit height.
        exit_y: f32,
    },

    /// A threshold is NaN or infinite.
    #[error("{name} is not a finite height")]
    NonFiniteThreshold {
        /// `"enter_y"` or `"exit_y"`.
        name: &'static str,
    },

    /// Tween durations must be positive and finite.
    #[error("{channel} duration must be positive, got {duration}")]
    NonPositiveDuration {
        /// Channel the duration belongs to.
        channel: Channel,
        /// Rejected duration in seconds.
        duration: f32,
    },

    /// The easing curve cannot be evaluated.
    #[error("{channel} easing curve is invalid: {source}")]
    InvalidCurve {
        /// Channel the curve belongs to.
        channel: Channel,
        /// What is wrong with the curve.
        #[source]
        source: CurveError,
    },
}
