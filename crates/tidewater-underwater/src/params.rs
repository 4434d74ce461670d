//! Values carried by the two blend channels.

use tidewater_config::FogPreset;
use tidewater_math::{Blend, clamp01};

use crate::state::TransitionState;

/// Fog distances and density handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogParams {
    /// Distance at which linear fog begins.
    pub start: f32,
    /// Distance at which linear fog is fully opaque.
    pub end: f32,
    /// Exponential fog density.
    pub density: f32,
}

impl From<FogPreset> for FogParams {
    fn from(preset: FogPreset) -> Self {
        Self {
            start: preset.start,
            end: preset.end,
            density: preset.density,
        }
    }
}

impl Blend for FogParams {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            start: Blend::lerp(self.start, other.start, t),
            end: Blend::lerp(self.end, other.end, t),
            density: Blend::lerp(self.density, other.density, t),
        }
    }
}

/// Complementary weights of the surface and underwater volumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeWeights {
    /// Contribution of the above-water volume.
    pub surface: f32,
    /// Contribution of the below-water volume.
    pub underwater: f32,
}

impl VolumeWeights {
    /// Only the surface volume contributes.
    pub const SURFACE: Self = Self {
        surface: 1.0,
        underwater: 0.0,
    };

    /// Only the underwater volume contributes.
    pub const UNDERWATER: Self = Self {
        surface: 0.0,
        underwater: 1.0,
    };

    /// Resting weights for a state.
    pub fn for_state(state: TransitionState) -> Self {
        match state {
            TransitionState::Surface => Self::SURFACE,
            TransitionState::Underwater => Self::UNDERWATER,
        }
    }

    /// Both weights clamped into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            surface: clamp01(self.surface),
            underwater: clamp01(self.underwater),
        }
    }
}

impl Blend for VolumeWeights {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            surface: Blend::lerp(self.surface, other.surface, t),
            underwater: Blend::lerp(self.underwater, other.underwater, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_params_from_preset() {
        let fog = FogParams::from(FogPreset::UNDERWATER);
        assert_eq!(fog.start, 200.0);
        assert_eq!(fog.end, 800.0);
        assert_eq!(fog.density, 0.02);
    }

    #[test]
    fn test_fog_lerp_moves_every_field() {
        let a = FogParams::from(FogPreset::SURFACE);
        let b = FogParams::from(FogPreset::UNDERWATER);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.start, 350.0);
        assert_eq!(mid.end, 900.0);
        assert!((mid.density - 0.0125).abs() < 1e-6);
    }

    #[test]
    fn test_volume_weights_stay_complementary() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let w = VolumeWeights::SURFACE.lerp(VolumeWeights::UNDERWATER, t);
            assert!(
                (w.surface + w.underwater - 1.0).abs() < 1e-6,
                "weights should sum to 1 at t={t}, got {w:?}"
            );
        }
    }

    #[test]
    fn test_clamped_limits_overshoot() {
        let w = VolumeWeights {
            surface: -0.5,
            underwater: 1.5,
        };
        assert_eq!(w.clamped(), VolumeWeights::UNDERWATER);
    }
}
