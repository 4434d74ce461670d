//! Menu panel visibility and exit requests.

pub mod panels;

pub use panels::{PanelId, PanelManager};
