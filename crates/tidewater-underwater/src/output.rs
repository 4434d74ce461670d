//! Hand-off of computed values to the rendering side.
//!
//! The controller never touches render state itself. Callers either read an
//! [`UnderwaterOutput`] snapshot, or push it into whichever [`OutputTargets`]
//! they have wired up. A missing target is skipped; its value is still
//! computed and remains readable from the snapshot.

use crate::params::{FogParams, VolumeWeights};

/// Receives fog parameters.
///
/// Fog must be switched on at the render side for the parameters to show.
/// [`UnderwaterOutput::apply_to`] calls [`set_fog_enabled`](Self::set_fog_enabled)
/// before every [`apply_fog`](Self::apply_fog); sinks whose fog is always on
/// can keep the default no-op.
pub trait FogTarget {
    /// Apply the current fog parameters.
    fn apply_fog(&mut self, fog: &FogParams);

    /// Turn render fog on or off.
    fn set_fog_enabled(&mut self, _enabled: bool) {}
}

/// Receives a single post-processing volume weight in `[0, 1]`.
pub trait VolumeTarget {
    /// Set this volume's weight.
    fn set_weight(&mut self, weight: f32);
}

impl<F: FnMut(&FogParams)> FogTarget for F {
    fn apply_fog(&mut self, fog: &FogParams) {
        self(fog)
    }
}

impl<F: FnMut(f32)> VolumeTarget for F {
    fn set_weight(&mut self, weight: f32) {
        self(weight)
    }
}

/// Current values of both channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnderwaterOutput {
    /// Whether render fog should be on. The controller always reports `true`.
    pub fog_enabled: bool,
    /// Fog parameters.
    pub fog: FogParams,
    /// Raw volume weights. May leave `[0, 1]` with overshooting curves;
    /// [`apply_to`](Self::apply_to) clamps before forwarding.
    pub volumes: VolumeWeights,
}

impl UnderwaterOutput {
    /// Forward the snapshot to every target that is present.
    pub fn apply_to(&self, targets: &mut OutputTargets<'_>) {
        if let Some(fog) = &mut targets.fog {
            fog.set_fog_enabled(self.fog_enabled);
            fog.apply_fog(&self.fog);
        }

        let weights = self.volumes.clamped();
        if let Some(surface) = &mut targets.surface_volume {
            surface.set_weight(weights.surface);
        }
        if let Some(underwater) = &mut targets.underwater_volume {
            underwater.set_weight(weights.underwater);
        }
    }
}

/// Optional sinks for the controller's outputs.
#[derive(Default)]
pub struct OutputTargets<'a> {
    /// Fog sink.
    pub fog: Option<&'a mut dyn FogTarget>,
    /// Above-water volume.
    pub surface_volume: Option<&'a mut dyn VolumeTarget>,
    /// Below-water volume.
    pub underwater_volume: Option<&'a mut dyn VolumeTarget>,
}

impl<'a> OutputTargets<'a> {
    /// No targets attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a fog sink.
    pub fn with_fog(mut self, target: &'a mut dyn FogTarget) -> Self {
        self.fog = Some(target);
        self
    }

    /// Attach the surface volume.
    pub fn with_surface_volume(mut self, target: &'a mut dyn VolumeTarget) -> Self {
        self.surface_volume = Some(target);
        self
    }

    /// Attach the underwater volume.
    pub fn with_underwater_volume(mut self, target: &'a mut dyn VolumeTarget) -> Self {
        self.underwater_volume = Some(target);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingVolume {
        weights: Vec<f32>,
    }

    impl VolumeTarget for RecordingVolume {
        fn set_weight(&mut self, weight: f32) {
            self.weights.push(weight);
        }
    }

    #[derive(Default)]
    struct RecordingFog {
        enabled: Option<bool>,
        applied: Vec<FogParams>,
    }

    impl FogTarget for RecordingFog {
        fn apply_fog(&mut self, fog: &FogParams) {
            assert!(self.enabled.is_some(), "fog applied before being enabled");
            self.applied.push(*fog);
        }

        fn set_fog_enabled(&mut self, enabled: bool) {
            self.enabled = Some(enabled);
        }
    }

    fn sample_output() -> UnderwaterOutput {
        UnderwaterOutput {
            fog_enabled: true,
            fog: FogParams {
                start: 300.0,
                end: 900.0,
                density: 0.01,
            },
            volumes: VolumeWeights {
                surface: 0.25,
                underwater: 0.75,
            },
        }
    }

    #[test]
    fn test_all_targets_receive_values() {
        let mut fog_seen = None;
        let mut record_fog = |fog: &FogParams| fog_seen = Some(*fog);
        let mut surface = RecordingVolume::default();
        let mut underwater = RecordingVolume::default();

        let mut targets = OutputTargets::new()
            .with_fog(&mut record_fog)
            .with_surface_volume(&mut surface)
            .with_underwater_volume(&mut underwater);
        sample_output().apply_to(&mut targets);
        drop(targets);

        assert_eq!(fog_seen, Some(sample_output().fog));
        assert_eq!(surface.weights, vec![0.25]);
        assert_eq!(underwater.weights, vec![0.75]);
    }

    #[test]
    fn test_fog_sink_is_enabled_before_parameters() {
        let mut fog = RecordingFog::default();
        let mut targets = OutputTargets::new().with_fog(&mut fog);
        sample_output().apply_to(&mut targets);
        drop(targets);

        assert_eq!(fog.enabled, Some(true));
        assert_eq!(fog.applied, vec![sample_output().fog]);
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let mut underwater = RecordingVolume::default();
        let mut targets = OutputTargets::new().with_underwater_volume(&mut underwater);
        sample_output().apply_to(&mut targets);
        drop(targets);

        assert_eq!(underwater.weights, vec![0.75]);

        // Nothing attached at all is fine too.
        sample_output().apply_to(&mut OutputTargets::new());
    }

    #[test]
    fn test_weights_are_clamped_when_forwarded() {
        let mut output = sample_output();
        output.volumes = VolumeWeights {
            surface: -0.2,
            underwater: 1.2,
        };
        let mut surface = RecordingVolume::default();
        let mut underwater = RecordingVolume::default();
        let mut targets = OutputTargets::new()
            .with_surface_volume(&mut surface)
            .with_underwater_volume(&mut underwater);
        output.apply_to(&mut targets);
        drop(targets);

        assert_eq!(surface.weights, vec![0.0]);
        assert_eq!(underwater.weights, vec![1.0]);
    }
}
