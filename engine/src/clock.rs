//! Display timestamps for turns and events.

use chrono::Local;

/// `3:04:05 PM` style local time.
pub const TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Source of display timestamps, injectable so tests can pin exact output.
pub trait Clock: Send + Sync {
    fn now_label(&self) -> String;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        Local::now().format(TIME_FORMAT).to_string()
    }
}

/// Always reports the same label.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.0.clone()
    }
}
