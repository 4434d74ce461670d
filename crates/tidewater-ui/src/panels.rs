//! Visibility bookkeeping for the scene's menu panels.
//!
//! The manager only tracks state; the host UI reads [`PanelManager::is_visible`]
//! when drawing and polls [`PanelManager::exit_requested`] in its main loop.

use tracing::{debug, info};

/// Menu elements that can be shown or hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// Introductory text panel.
    Intro,
    /// First content panel.
    First,
    /// Button that starts the experience.
    StartButton,
}

impl PanelId {
    /// Every panel, in display order.
    pub const ALL: [PanelId; 3] = [PanelId::Intro, PanelId::First, PanelId::StartButton];

    fn index(self) -> usize {
        match self {
            PanelId::Intro => 0,
            PanelId::First => 1,
            PanelId::StartButton => 2,
        }
    }
}

/// Tracks which panels are visible and whether the user asked to quit.
#[derive(Clone, Debug)]
pub struct PanelManager {
    visible: [bool; PanelId::ALL.len()],
    exit_requested: bool,
}

impl Default for PanelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelManager {
    /// Start layout: only the start button is shown.
    pub fn new() -> Self {
        let mut manager = Self {
            visible: [false; PanelId::ALL.len()],
            exit_requested: false,
        };
        manager.show(PanelId::StartButton);
        manager
    }

    /// Whether `panel` is shown.
    pub fn is_visible(&self, panel: PanelId) -> bool {
        self.visible[panel.index()]
    }

    /// Show or hide `panel`.
    pub fn set_visible(&mut self, panel: PanelId, visible: bool) {
        self.visible[panel.index()] = visible;
        debug!(?panel, visible, "Panel visibility changed");
    }

    /// Show `panel`.
    pub fn show(&mut self, panel: PanelId) {
        self.set_visible(panel, true);
    }

    /// Hide `panel`.
    pub fn hide(&mut self, panel: PanelId) {
        self.set_visible(panel, false);
    }

    /// Flip `panel` and return its new visibility.
    pub fn toggle(&mut self, panel: PanelId) -> bool {
        let visible = !self.is_visible(panel);
        self.set_visible(panel, visible);
        visible
    }

    /// Show `panel` and hide every other one.
    pub fn show_only(&mut self, panel: PanelId) {
        for other in PanelId::ALL {
            self.set_visible(other, other == panel);
        }
    }

    /// Currently visible panels in display order.
    pub fn visible_panels(&self) -> Vec<PanelId> {
        PanelId::ALL
            .into_iter()
            .filter(|panel| self.is_visible(*panel))
            .collect()
    }

    /// Record that the user asked to quit.
    pub fn request_exit(&mut self) {
        if !self.exit_requested {
            info!("Exit requested");
        }
        self.exit_requested = true;
    }

    /// Whether [`request_exit`](Self::request_exit) has been called.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
