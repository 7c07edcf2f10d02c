//! View state for rendering.
//!
//! Theme, active tab and per-panel scroll live here, owned by the host and
//! passed down to rendering. Nothing in this crate keeps global UI state.

use super::{ScrollState, Tab, Theme};

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Freeze the banner animation.
    pub reduced_motion: bool,
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub theme: Theme,
    pub tab: Tab,
    pub chat_scroll: ScrollState,
    pub monitor_scroll: ScrollState,
    /// Scrollable lines per panel, as measured by the last render.
    pub chat_scroll_max: u16,
    pub monitor_scroll_max: u16,
    pub ui_options: UiOptions,
}

impl ViewState {
    #[must_use]
    pub fn new(theme: Theme, ui_options: UiOptions) -> Self {
        Self {
            theme,
            ui_options,
            ..Self::default()
        }
    }

    /// Scroll state of the currently visible panel.
    pub fn active_scroll_mut(&mut self) -> &mut ScrollState {
        match self.tab {
            Tab::Chat => &mut self.chat_scroll,
            Tab::Monitor => &mut self.monitor_scroll,
        }
    }

    #[must_use]
    pub fn scroll_max(&self, tab: Tab) -> u16 {
        match tab {
            Tab::Chat => self.chat_scroll_max,
            Tab::Monitor => self.monitor_scroll_max,
        }
    }

    /// Record the measured range of `tab` and keep its offset inside it.
    pub fn set_scroll_max(&mut self, tab: Tab, max: u16) {
        let (scroll, scroll_max) = match tab {
            Tab::Chat => (&mut self.chat_scroll, &mut self.chat_scroll_max),
            Tab::Monitor => (&mut self.monitor_scroll, &mut self.monitor_scroll_max),
        };
        *scroll_max = max;
        *scroll = scroll.clamp(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_range_clamps_that_panel_only() {
        let mut view = ViewState::default();
        view.chat_scroll = ScrollState::Manual { offset_from_bottom: 30 };
        view.monitor_scroll = ScrollState::Manual { offset_from_bottom: 30 };

        view.set_scroll_max(Tab::Chat, 8);
        assert_eq!(view.chat_scroll, ScrollState::Manual { offset_from_bottom: 8 });
        assert_eq!(view.scroll_max(Tab::Chat), 8);
        assert_eq!(view.monitor_scroll, ScrollState::Manual { offset_from_bottom: 30 });
    }
}
