//! Selection, panel visibility and dark mode

use crate::theme::ThemeMode;
use copilot_inbox_core::{ConversationId, InboxSettings};
use serde::Serialize;
use tracing::debug;

/// Viewport widths at which the side panels appear by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoints {
    pub list: u32,
    pub copilot: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::from(&InboxSettings::default())
    }
}

impl From<&InboxSettings> for Breakpoints {
    fn from(settings: &InboxSettings) -> Self {
        Self {
            list: settings.list_breakpoint,
            copilot: settings.copilot_breakpoint,
        }
    }
}

impl Breakpoints {
    pub fn list_visible(&self, width: u32) -> bool {
        width >= self.list
    }

    pub fn copilot_visible(&self, width: u32) -> bool {
        width >= self.copilot
    }

    /// Below the list breakpoint the list and the chat share the screen
    pub fn is_compact(&self, width: u32) -> bool {
        width < self.list
    }
}

/// Layout axes owned by the controller.
///
/// Only `dark_mode` survives a reload; the panel flags are derived from the
/// viewport on load and on every resize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub selected: Option<ConversationId>,
    pub list_visible: bool,
    pub copilot_visible: bool,
    pub dark_mode: bool,
    pub viewport_width: u32,
}

impl LayoutState {
    pub fn on_load(viewport_width: u32, breakpoints: Breakpoints, dark_mode: bool) -> Self {
        Self {
            selected: None,
            list_visible: breakpoints.list_visible(viewport_width),
            copilot_visible: breakpoints.copilot_visible(viewport_width),
            dark_mode,
            viewport_width,
        }
    }

    /// Recompute both panel flags, discarding manual toggles
    pub fn resize(&mut self, width: u32, breakpoints: Breakpoints) {
        self.viewport_width = width;
        self.list_visible = breakpoints.list_visible(width);
        self.copilot_visible = breakpoints.copilot_visible(width);
        debug!(
            "Viewport {} -> list: {}, copilot: {}",
            width, self.list_visible, self.copilot_visible
        );
    }

    /// Select a conversation. In compact layouts the list gives way to the chat.
    pub fn select(&mut self, id: ConversationId, breakpoints: Breakpoints) {
        self.selected = Some(id);
        if breakpoints.is_compact(self.viewport_width) {
            self.list_visible = false;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn toggle_list(&mut self) -> bool {
        self.list_visible = !self.list_visible;
        self.list_visible
    }

    pub fn toggle_copilot(&mut self) -> bool {
        self.copilot_visible = !self.copilot_visible;
        self.copilot_visible
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn theme(&self) -> ThemeMode {
        ThemeMode::from_dark_mode(self.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_derives_panels_from_width() {
        let bp = Breakpoints::default();

        let wide = LayoutState::on_load(1200, bp, false);
        assert!(wide.list_visible && wide.copilot_visible);

        let medium = LayoutState::on_load(900, bp, false);
        assert!(medium.list_visible);
        assert!(!medium.copilot_visible);

        let narrow = LayoutState::on_load(500, bp, true);
        assert!(!narrow.list_visible && !narrow.copilot_visible);
        assert_eq!(narrow.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_breakpoints_are_inclusive() {
        let bp = Breakpoints::default();
        assert!(bp.list_visible(768));
        assert!(!bp.list_visible(767));
        assert!(bp.copilot_visible(1024));
        assert!(!bp.copilot_visible(1023));
    }

    #[test]
    fn test_resize_overrides_manual_toggles() {
        let bp = Breakpoints::default();
        let mut layout = LayoutState::on_load(1200, bp, false);
        layout.toggle_copilot();
        layout.toggle_list();
        assert!(!layout.list_visible && !layout.copilot_visible);

        layout.resize(1300, bp);
        assert!(layout.list_visible && layout.copilot_visible);

        layout.toggle_list();
        layout.resize(500, bp);
        assert_eq!(
            (layout.list_visible, layout.copilot_visible),
            (false, false)
        );
    }

    #[test]
    fn test_select_drills_in_only_when_compact() {
        let bp = Breakpoints::default();

        let mut wide = LayoutState::on_load(1200, bp, false);
        wide.select(ConversationId::new(2), bp);
        assert_eq!(wide.selected, Some(ConversationId::new(2)));
        assert!(wide.list_visible);

        let mut narrow = LayoutState::on_load(600, bp, false);
        narrow.toggle_list();
        assert!(narrow.list_visible);
        narrow.select(ConversationId::new(2), bp);
        assert!(!narrow.list_visible);
    }

    #[test]
    fn test_custom_breakpoints() {
        let settings = InboxSettings {
            list_breakpoint: 600,
            copilot_breakpoint: 900,
            ..InboxSettings::default()
        };
        let layout = LayoutState::on_load(700, Breakpoints::from(&settings), false);
        assert!(layout.list_visible);
        assert!(!layout.copilot_visible);
    }
}
