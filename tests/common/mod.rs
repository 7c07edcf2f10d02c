//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use aura_engine::{
    App, Clock, ConversationEngine, DEFAULT_REPLY_DELAY, DEFAULT_TICK_INTERVAL, FixedClock,
    ScriptedRandom, TelemetryEngine, ViewState,
};

pub const FIXED_TIME: &str = "3:07:42 PM";

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(FIXED_TIME))
}

pub fn conversation() -> ConversationEngine {
    ConversationEngine::new(fixed_clock(), DEFAULT_REPLY_DELAY)
}

/// Telemetry engine whose random draws cycle through `units`.
pub fn telemetry(units: &[f64]) -> TelemetryEngine {
    TelemetryEngine::new(
        fixed_clock(),
        Box::new(ScriptedRandom::from_units(units)),
        DEFAULT_TICK_INTERVAL,
    )
}

pub fn app() -> App {
    App::from_parts(conversation(), telemetry(&[0.5]), ViewState::default())
}

/// Sleep just past `duration` on paused time so timers due at `duration` have fired.
pub async fn elapse(duration: Duration) {
    tokio::time::sleep(duration + Duration::from_millis(1)).await;
}
