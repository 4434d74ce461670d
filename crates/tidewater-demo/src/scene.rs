//! Scripted headless scene: a camera bobbing through the waterline while a
//! helmet is dragged around and the menu is stepped through.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use tidewater_config::Config;
use tidewater_input::{DragRotator, MouseDrag};
use tidewater_ui::{PanelId, PanelManager};
use tidewater_underwater::{
    FogParams, FogTarget, OutputTargets, TransitionEvent, UnderwaterConfigError,
    UnderwaterController, VolumeTarget,
};
use tracing::{debug, info};

/// Seconds for one full bob of the camera.
const BOB_PERIOD: f32 = 8.0;
/// Peak distance of the camera from the bob centre.
const BOB_AMPLITUDE: f32 = 3.0;
/// Scripted cursor speed while dragging, in pixels per second.
const DRAG_SPEED: f32 = 60.0;

/// Camera height at `t` seconds: a slow bob centred on `enter_y`, with the
/// camera lost (no sample) for a short stretch each cycle.
pub fn camera_height(t: f32, enter_y: f32) -> Option<f32> {
    let phase = (t / BOB_PERIOD).fract();
    if (0.45..0.5).contains(&phase) {
        return None;
    }
    Some(enter_y + BOB_AMPLITUDE * (TAU * phase).cos())
}

/// Fog sink standing in for the renderer's fog settings.
#[derive(Debug, Default)]
pub struct RenderFog {
    /// Render fog switch.
    pub enabled: bool,
    /// Last applied parameters.
    pub current: Option<FogParams>,
}

impl FogTarget for RenderFog {
    fn apply_fog(&mut self, fog: &FogParams) {
        self.current = Some(*fog);
    }

    fn set_fog_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Post-processing volume sink.
#[derive(Debug, Default)]
pub struct RenderVolume {
    /// Last applied weight.
    pub weight: f32,
}

impl VolumeTarget for RenderVolume {
    fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }
}

/// Everything the demo ticks each fixed step.
pub struct DemoScene {
    controller: UnderwaterController,
    panels: PanelManager,
    drag: MouseDrag,
    rotator: DragRotator,
    helmet: Quat,
    fog: RenderFog,
    surface_volume: RenderVolume,
    underwater_volume: RenderVolume,
    enter_y: f32,
    trace_every_ticks: u32,
    ticks: u64,
    transitions: u32,
    drags_started: u32,
}

impl DemoScene {
    /// Build the scene, rejecting invalid underwater settings.
    pub fn new(config: &Config) -> Result<Self, UnderwaterConfigError> {
        let controller = UnderwaterController::new(&config.underwater)?;
        let mut scene = Self {
            controller,
            panels: PanelManager::new(),
            drag: MouseDrag::new(),
            rotator: DragRotator::from_config(&config.drag),
            helmet: Quat::IDENTITY,
            fog: RenderFog::default(),
            surface_volume: RenderVolume::default(),
            underwater_volume: RenderVolume::default(),
            enter_y: config.underwater.enter_y,
            trace_every_ticks: config.debug.trace_every_ticks,
            ticks: 0,
            transitions: 0,
            drags_started: 0,
        };
        scene.apply_outputs();
        Ok(scene)
    }

    /// Advance one fixed step of `dt` seconds at simulation time `t`.
    pub fn step(&mut self, dt: f32, t: f32) {
        self.script_input(t, dt);
        self.rotate_helmet();

        let event = match camera_height(t, self.enter_y) {
            Some(height) => self.controller.tick(height, dt),
            None => self.controller.advance(dt),
        };
        if let Some(event) = event {
            self.on_event(event, t);
        }

        self.apply_outputs();
        self.ticks += 1;

        if self.trace_every_ticks > 0 && self.ticks % u64::from(self.trace_every_ticks) == 0 {
            let fog = self.controller.fog();
            debug!(
                t,
                underwater = self.controller.is_underwater(),
                fog_start = fog.start,
                fog_end = fog.end,
                fog_density = fog.density,
                surface_weight = self.surface_volume.weight,
                underwater_weight = self.underwater_volume.weight,
                "Scene state"
            );
        }
    }

    /// Number of transitions that have started.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Number of helmet drags that have begun.
    pub fn drags_started(&self) -> u32 {
        self.drags_started
    }

    /// The underwater controller.
    pub fn controller(&self) -> &UnderwaterController {
        &self.controller
    }

    /// Menu panel state.
    pub fn panels(&self) -> &PanelManager {
        &self.panels
    }

    /// Current helmet orientation.
    pub fn helmet(&self) -> Quat {
        self.helmet
    }

    /// Last fog forwarded to the fog sink, `None` while render fog is off.
    pub fn applied_fog(&self) -> Option<FogParams> {
        self.fog.current.filter(|_| self.fog.enabled)
    }

    /// Last `(surface, underwater)` weights forwarded to the volumes.
    pub fn applied_weights(&self) -> (f32, f32) {
        (self.surface_volume.weight, self.underwater_volume.weight)
    }

    /// Close the menu flow and ask the host to quit.
    pub fn finish(&mut self) {
        self.panels.request_exit();
    }

    fn on_event(&mut self, event: TransitionEvent, t: f32) {
        match event {
            TransitionEvent::Started { to } => {
                self.transitions += 1;
                info!(t, ?to, "Camera crossed the waterline");
            }
            TransitionEvent::Completed { state } => {
                info!(t, ?state, "Visuals settled");
            }
        }
    }

    /// Pressing start at 1s opens the intro, which gives way to the first
    /// panel at 3s. Between 4s and 6s the helmet is dragged to the right.
    fn script_input(&mut self, t: f32, dt: f32) {
        let reaches = |at: f32| t <= at && at < t + dt;
        if reaches(1.0) {
            self.panels.hide(PanelId::StartButton);
            self.panels.show(PanelId::Intro);
        }
        if reaches(3.0) {
            self.panels.show_only(PanelId::First);
        }

        self.drag.end_frame();
        let dragging = (4.0..6.0).contains(&t);
        if dragging != self.drag.is_dragging() {
            self.drag.on_button(dragging);
        }
        if self.drag.just_started()
            && let Some(at) = self.drag.position()
        {
            self.drags_started += 1;
            debug!(t, x = at.x, y = at.y, "Helmet drag started");
        }
        self.drag.on_cursor_moved(400.0 + (t - 4.0).max(0.0) * DRAG_SPEED, 300.0);
    }

    fn rotate_helmet(&mut self) {
        self.helmet = self.rotator.rotate(self.helmet, self.drag.delta(), Vec3::X);
    }

    fn apply_outputs(&mut self) {
        let mut targets = OutputTargets::new()
            .with_fog(&mut self.fog)
            .with_surface_volume(&mut self.surface_volume)
            .with_underwater_volume(&mut self.underwater_volume);
        self.controller.apply(&mut targets);
    }
}
