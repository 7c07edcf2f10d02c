//! Theme and tab selection owned by the top-level view.

use serde::Deserialize;

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// The two panels of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Chat,
    Monitor,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Chat, Tab::Monitor];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tab::Chat => "AI Chat",
            Tab::Monitor => "Ambient Agent Monitoring",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tab::Chat => 0,
            Tab::Monitor => 1,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Tab::Chat => Tab::Monitor,
            Tab::Monitor => Tab::Chat,
        }
    }
}
