//! Theme selection for Copilot Inbox
//!
//! Colors and typography belong to the renderer; the state layer only decides
//! which theme mode is active.

use serde::Serialize;

/// Active color scheme, driven by the persisted dark-mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Layout constants
pub mod layout {
    /// Viewport width assumed when the host reports none
    pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
}
