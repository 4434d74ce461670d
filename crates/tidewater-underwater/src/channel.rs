//! A single eased tween from a captured start value toward a target.

use tidewater_math::{Blend, EasingCurve, clamp01};

/// One tweened output value.
///
/// A channel is idle until [`retarget`](Self::retarget) starts a tween from
/// whatever the current value is. Each [`step`](Self::step) advances elapsed
/// time and re-evaluates the curve; once elapsed reaches the duration the value
/// is set to the target exactly and the channel goes idle again.
#[derive(Clone, Debug)]
pub struct BlendChannel<T: Blend> {
    start: T,
    current: T,
    target: T,
    elapsed: f32,
    duration: f32,
    curve: EasingCurve,
    active: bool,
}

impl<T: Blend> BlendChannel<T> {
    /// Create an idle channel resting at `value`.
    ///
    /// `duration` is expected to be positive; controllers validate it first.
    pub fn new(value: T, duration: f32, curve: EasingCurve) -> Self {
        Self {
            start: value,
            current: value,
            target: value,
            elapsed: 0.0,
            duration,
            curve,
            active: false,
        }
    }

    /// Start tweening toward `target` from the live current value.
    pub fn retarget(&mut self, target: T) {
        self.start = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Jump straight to `value`, cancelling any tween in progress.
    pub fn snap(&mut self, value: T) {
        self.start = value;
        self.current = value;
        self.target = value;
        self.elapsed = self.duration;
        self.active = false;
    }

    /// Advance by `dt` seconds. Returns `true` once the channel is idle.
    ///
    /// Negative `dt` is treated as zero.
    pub fn step(&mut self, dt: f32) -> bool {
        if !self.active {
            return true;
        }

        self.elapsed += dt.max(0.0);
        let k = self.curve.evaluate(clamp01(self.elapsed / self.duration));
        self.current = self.start.lerp(self.target, k);

        if self.elapsed >= self.duration {
            self.current = self.target;
            self.active = false;
        }
        !self.active
    }

    /// Live value.
    pub fn value(&self) -> T {
        self.current
    }

    /// Value the current tween started from.
    pub fn start(&self) -> T {
        self.start
    }

    /// Value the channel is heading toward (or resting at).
    pub fn target(&self) -> T {
        self.target
    }

    /// Whether a tween is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tween length in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Linear progress in `[0, 1]`; `1.0` when idle.
    pub fn progress(&self) -> f32 {
        if self.active {
            clamp01(self.elapsed / self.duration)
        } else {
            1.0
        }
    }
}
