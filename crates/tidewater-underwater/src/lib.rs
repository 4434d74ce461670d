//! Depth-triggered underwater transitions: fog and post-processing volume
//! crossfades driven by camera height, with hysteresis and a tween lock.

pub mod channel;
pub mod controller;
pub mod error;
pub mod output;
pub mod params;
pub mod state;

pub use channel::BlendChannel;
pub use controller::{TransitionEvent, UnderwaterController};
pub use error::{Channel, UnderwaterConfigError};
pub use output::{FogTarget, OutputTargets, UnderwaterOutput, VolumeTarget};
pub use params::{FogParams, VolumeWeights};
pub use state::{DepthThresholds, TransitionState};
