//! Fixed-timestep stepping with an accumulator.
//!
//! Frame times are passed in explicitly so a headless run is deterministic.
//! Simulation always advances in [`FIXED_DT`] increments; long frames are
//! clamped to [`MAX_FRAME_TIME`] rather than caught up. Time is kept in `f64`
//! so the clock keeps moving on long runs; steps see it narrowed to `f32`.

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame that is simulated in full.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator state for fixed-rate updates.
#[derive(Debug, Default)]
pub struct FixedStepLoop {
    accumulator: f64,
    total_sim_time: f64,
    update_count: u64,
}

impl FixedStepLoop {
    /// Creates an empty loop at sim time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of `frame_time` seconds.
    ///
    /// Calls `update_fn(FIXED_DT, sim_time)` zero or more times, where
    /// `sim_time` is the time at the start of that step.
    pub fn frame(&mut self, frame_time: f64, mut update_fn: impl FnMut(f32, f32)) {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT as f32, self.total_sim_time as f32);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }
    }

    /// Simulated seconds so far.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }

    /// Fixed steps run so far.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step() {
        let mut sim = FixedStepLoop::new();
        let mut updates = 0u32;
        sim.frame(FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 1);
    }

    #[test]
    fn test_partial_frame_carries_over() {
        let mut sim = FixedStepLoop::new();
        let mut updates = 0u32;
        sim.frame(0.6 * FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 0);
        sim.frame(0.6 * FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 1);
    }

    #[test]
    fn test_sim_time_passed_to_update() {
        let mut sim = FixedStepLoop::new();
        let mut times = Vec::new();
        sim.frame(3.5 * FIXED_DT, |_, t| times.push(t));
        assert_eq!(times.len(), 3);
        assert_eq!(times[0], 0.0);
        assert!((f64::from(times[2]) - 2.0 * FIXED_DT).abs() < 1e-6);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut sim = FixedStepLoop::new();
        let mut updates = 0u32;
        sim.frame(2.0, |_, _| updates += 1);
        let max_updates = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(updates <= max_updates, "got {updates} updates");
        assert!(updates > 0);
        assert!(sim.total_sim_time() <= MAX_FRAME_TIME + 1e-9);
    }

    #[test]
    fn test_clock_advances_on_long_runs() {
        let mut sim = FixedStepLoop::new();
        sim.total_sim_time = 600_000.0;
        let before = sim.total_sim_time();
        let mut steps = 0u32;
        for _ in 0..45 {
            sim.frame(1.0 / 45.0, |_, _| steps += 1);
        }
        let advanced = sim.total_sim_time() - before;
        assert!(steps >= 59, "expected about a second of steps, got {steps}");
        assert!(
            (advanced - f64::from(steps) * FIXED_DT).abs() < 1e-6,
            "sim clock advanced {advanced}s over {steps} steps"
        );
    }
}
