//! Discrete transition state and the hysteresis band that drives it.

use crate::error::UnderwaterConfigError;

/// Which side of the waterline the camera is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Above water.
    #[default]
    Surface,
    /// Below water.
    Underwater,
}

impl TransitionState {
    /// The state on the other side of the waterline.
    pub fn opposite(self) -> Self {
        match self {
            TransitionState::Surface => TransitionState::Underwater,
            TransitionState::Underwater => TransitionState::Surface,
        }
    }
}

/// Enter/exit heights. Invariant: both finite and `exit_y > enter_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthThresholds {
    enter_y: f32,
    exit_y: f32,
}

impl DepthThresholds {
    /// Build thresholds, rejecting a band that cannot provide hysteresis.
    pub fn new(enter_y: f32, exit_y: f32) -> Result<Self, UnderwaterConfigError> {
        if !enter_y.is_finite() {
            return Err(UnderwaterConfigError::NonFiniteThreshold { name: "enter_y" });
        }
        if !exit_y.is_finite() {
            return Err(UnderwaterConfigError::NonFiniteThreshold { name: "exit_y" });
        }
        if exit_y <= enter_y {
            return Err(UnderwaterConfigError::InvertedThresholds { enter_y, exit_y });
        }
        Ok(Self { enter_y, exit_y })
    }

    /// Height below which a surfaced camera submerges.
    pub fn enter_y(&self) -> f32 {
        self.enter_y
    }

    /// Height above which a submerged camera surfaces.
    pub fn exit_y(&self) -> f32 {
        self.exit_y
    }

    /// The state a camera at `height` should move to from `current`, if any.
    ///
    /// Heights inside `[enter_y, exit_y]` never cause a crossing. NaN heights
    /// compare false against both bounds and are ignored.
    pub fn crossing(&self, current: TransitionState, height: f32) -> Option<TransitionState> {
        match current {
            TransitionState::Surface if height < self.enter_y => Some(TransitionState::Underwater),
            TransitionState::Underwater if height > self.exit_y => Some(TransitionState::Surface),
            _ => None,
        }
    }
}
