//! Scroll state for the transcript and event log views.

/// Scroll position for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// Always keep the newest content visible.
    #[default]
    AutoBottom,
    /// Lines scrolled up from the bottom.
    Manual { offset_from_bottom: u16 },
}

impl ScrollState {
    /// Scroll `lines` further back, never past `max` (the top of the content).
    #[must_use]
    pub fn scroll_up(self, lines: u16, max: u16) -> Self {
        Self::at_offset(self.offset_from_bottom().saturating_add(lines).min(max))
    }

    #[must_use]
    pub fn scroll_down(self, lines: u16) -> Self {
        Self::at_offset(self.offset_from_bottom().saturating_sub(lines))
    }

    /// Pull a manual offset back inside a scrollable range that shrank or was measured.
    #[must_use]
    pub fn clamp(self, max: u16) -> Self {
        Self::at_offset(self.offset_from_bottom().min(max))
    }

    fn at_offset(offset_from_bottom: u16) -> Self {
        match offset_from_bottom {
            0 => ScrollState::AutoBottom,
            offset_from_bottom => ScrollState::Manual { offset_from_bottom },
        }
    }

    #[must_use]
    pub fn offset_from_bottom(self) -> u16 {
        match self {
            ScrollState::AutoBottom => 0,
            ScrollState::Manual { offset_from_bottom } => offset_from_bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_back_to_zero_pins_bottom() {
        let state = ScrollState::AutoBottom.scroll_up(3, 10);
        assert_eq!(state, ScrollState::Manual { offset_from_bottom: 3 });
        assert_eq!(state.scroll_down(5), ScrollState::AutoBottom);
    }

    #[test]
    fn scroll_down_at_bottom_is_noop() {
        assert_eq!(ScrollState::AutoBottom.scroll_down(1), ScrollState::AutoBottom);
    }

    #[test]
    fn scroll_up_stops_at_top() {
        let mut state = ScrollState::AutoBottom;
        for _ in 0..10 {
            state = state.scroll_up(3, 7);
        }
        assert_eq!(state, ScrollState::Manual { offset_from_bottom: 7 });

        // One step back down is visible immediately.
        assert_eq!(state.scroll_down(3), ScrollState::Manual { offset_from_bottom: 4 });
    }

    #[test]
    fn nothing_to_scroll_stays_at_bottom() {
        assert_eq!(ScrollState::AutoBottom.scroll_up(3, 0), ScrollState::AutoBottom);
    }

    #[test]
    fn clamp_pulls_offset_into_range() {
        let state = ScrollState::Manual { offset_from_bottom: 40 };
        assert_eq!(state.clamp(12), ScrollState::Manual { offset_from_bottom: 12 });
        assert_eq!(state.clamp(0), ScrollState::AutoBottom);
        assert_eq!(ScrollState::AutoBottom.clamp(5), ScrollState::AutoBottom);
    }
}
