//! The underwater transition state machine.
//!
//! Call [`UnderwaterController::tick`] once per frame with the camera height.
//! While a transition is tweening the controller holds a lock: it only advances
//! the tweens and ignores threshold crossings until both channels settle.
//! Manual triggers bypass the lock and restart both tweens from their live
//! values, so an interrupted transition never jumps.

use tidewater_config::UnderwaterConfig;
use tidewater_math::EasingCurve;
use tracing::{debug, info};

use crate::channel::BlendChannel;
use crate::error::{Channel, UnderwaterConfigError};
use crate::output::{OutputTargets, UnderwaterOutput};
use crate::params::{FogParams, VolumeWeights};
use crate::state::{DepthThresholds, TransitionState};

/// Something that happened during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    /// A threshold crossing started a transition toward `to`.
    Started {
        /// State being transitioned into.
        to: TransitionState,
    },
    /// All tweens settled and the lock was released.
    Completed {
        /// State the controller now rests in.
        state: TransitionState,
    },
}

/// Crossfades fog and volume weights between surface and underwater presets.
#[derive(Clone, Debug)]
pub struct UnderwaterController {
    thresholds: DepthThresholds,
    auto_trigger: bool,
    state: TransitionState,
    tween_fog: bool,
    surface_fog: FogParams,
    underwater_fog: FogParams,
    fog: BlendChannel<FogParams>,
    volumes: BlendChannel<VolumeWeights>,
    locked: bool,
}

impl UnderwaterController {
    /// Validate `config` and start at the surface preset with no tween running.
    pub fn new(config: &UnderwaterConfig) -> Result<Self, UnderwaterConfigError> {
        let thresholds = DepthThresholds::new(config.enter_y, config.exit_y)?;
        validate_channel(Channel::Fog, config.fog.duration, &config.fog.curve)?;
        validate_channel(
            Channel::Volumes,
            config.volumes.duration,
            &config.volumes.curve,
        )?;

        let surface_fog = FogParams::from(config.fog.surface);
        let underwater_fog = FogParams::from(config.fog.underwater);

        debug!(
            enter_y = thresholds.enter_y(),
            exit_y = thresholds.exit_y(),
            auto_trigger = config.auto_trigger,
            "Underwater controller initialized at surface"
        );

        Ok(Self {
            thresholds,
            auto_trigger: config.auto_trigger,
            state: TransitionState::Surface,
            tween_fog: config.fog.tween,
            surface_fog,
            underwater_fog,
            fog: BlendChannel::new(surface_fog, config.fog.duration, config.fog.curve.clone()),
            volumes: BlendChannel::new(
                VolumeWeights::SURFACE,
                config.volumes.duration,
                config.volumes.curve.clone(),
            ),
            locked: false,
        })
    }

    /// Per-frame update.
    ///
    /// While locked, advances the tweens by `dt` and does not look at
    /// `camera_height`. Otherwise, with auto-trigger on, a crossing of the
    /// state's threshold starts a transition; the starting tick does not
    /// advance the new tweens.
    pub fn tick(&mut self, camera_height: f32, dt: f32) -> Option<TransitionEvent> {
        if self.locked {
            return self.advance(dt);
        }
        if !self.auto_trigger {
            return None;
        }

        let next = self.thresholds.crossing(self.state, camera_height)?;
        self.begin(next);
        Some(TransitionEvent::Started { to: next })
    }

    /// Advance running tweens without evaluating thresholds.
    ///
    /// For frames with no camera to sample.
    pub fn advance(&mut self, dt: f32) -> Option<TransitionEvent> {
        if !self.locked {
            return None;
        }

        let fog_done = self.fog.step(dt);
        let volumes_done = self.volumes.step(dt);
        if fog_done && volumes_done {
            self.locked = false;
            debug!(state = ?self.state, "Underwater transition settled");
            return Some(TransitionEvent::Completed { state: self.state });
        }
        None
    }

    /// Go underwater now. Returns `false` if already underwater.
    pub fn enter_underwater(&mut self) -> bool {
        self.trigger(TransitionState::Underwater)
    }

    /// Surface now. Returns `false` if already at the surface.
    pub fn exit_underwater(&mut self) -> bool {
        self.trigger(TransitionState::Surface)
    }

    /// Whether the controller is in the underwater state.
    pub fn is_underwater(&self) -> bool {
        self.state == TransitionState::Underwater
    }

    /// Current discrete state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Whether the tween lock is held.
    pub fn is_transitioning(&self) -> bool {
        self.locked
    }

    /// Whether camera height is evaluated each tick.
    pub fn auto_trigger(&self) -> bool {
        self.auto_trigger
    }

    /// Enable or disable depth auto-triggering.
    pub fn set_auto_trigger(&mut self, enabled: bool) {
        self.auto_trigger = enabled;
    }

    /// Configured enter/exit heights.
    pub fn thresholds(&self) -> DepthThresholds {
        self.thresholds
    }

    /// Live fog parameters.
    pub fn fog(&self) -> FogParams {
        self.fog.value()
    }

    /// Live volume weights (unclamped).
    pub fn volume_weights(&self) -> VolumeWeights {
        self.volumes.value()
    }

    /// Fog channel, for inspecting tween progress.
    pub fn fog_channel(&self) -> &BlendChannel<FogParams> {
        &self.fog
    }

    /// Volume channel, for inspecting tween progress.
    pub fn volume_channel(&self) -> &BlendChannel<VolumeWeights> {
        &self.volumes
    }

    /// Snapshot of both outputs.
    pub fn output(&self) -> UnderwaterOutput {
        UnderwaterOutput {
            fog_enabled: true,
            fog: self.fog.value(),
            volumes: self.volumes.value(),
        }
    }

    /// Push current outputs into whichever targets are attached.
    pub fn apply(&self, targets: &mut OutputTargets<'_>) {
        self.output().apply_to(targets);
    }

    fn trigger(&mut self, next: TransitionState) -> bool {
        if self.state == next {
            debug!(state = ?next, "Transition ignored, already in state");
            return false;
        }
        self.begin(next);
        true
    }

    fn begin(&mut self, next: TransitionState) {
        self.state = next;

        let fog_target = match next {
            TransitionState::Surface => self.surface_fog,
            TransitionState::Underwater => self.underwater_fog,
        };
        if self.tween_fog {
            self.fog.retarget(fog_target);
        } else {
            self.fog.snap(fog_target);
        }
        self.volumes.retarget(VolumeWeights::for_state(next));
        self.locked = true;

        info!(
            state = ?next,
            interrupted = self.volumes.start() != VolumeWeights::for_state(next.opposite()),
            "Underwater transition started"
        );
    }
}

fn validate_channel(
    channel: Channel,
    duration: f32,
    curve: &EasingCurve,
) -> Result<(), UnderwaterConfigError> {
    if !(duration.is_finite() && duration > 0.0) {
        return Err(UnderwaterConfigError::NonPositiveDuration { channel, duration });
    }
    curve
        .validate()
        .map_err(|source| UnderwaterConfigError::InvalidCurve { channel, source })
}
