//! Core engine for Aura - simulated conversation and telemetry.
//!
//! This crate contains the App state without TUI dependencies. The two engines
//! schedule their timers on the tokio runtime and are drained from the host's
//! frame loop via [`App::tick`], so every mutation happens on one context.

use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod clock;
mod config;
mod conversation;
pub mod random;
mod schedule;
mod telemetry;

pub use aura_types::ui::{ScrollState, Tab, Theme, UiOptions, ViewState};
pub use aura_types::{ChatTurn, EventMeta, LogEvent, LogLevel, MetaValue, Role};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, AuraConfig, ChatConfig, ConfigError, MonitorConfig, config_path};
pub use conversation::{
    ConversationEngine, DEFAULT_REPLY_DELAY, Submission, WELCOME_MESSAGE, reply_template,
};
pub use random::{RandomSource, ScriptedRandom, ThreadRandom};
pub use schedule::{TaskHandle, spawn_after, spawn_every};
pub use telemetry::{DEFAULT_TICK_INTERVAL, EventTemplate, StreamState, TelemetryEngine};

/// Lines moved per scroll keypress.
const SCROLL_STEP: u16 = 3;

/// Spinner/banner cadence, independent of render FPS.
const UI_TICK: Duration = Duration::from_millis(100);

/// Host state: owns both engines plus everything the view needs.
#[derive(Debug)]
pub struct App {
    conversation: ConversationEngine,
    telemetry: TelemetryEngine,
    view: ViewState,
    draft: String,
    /// Last observed sequence sizes, for auto-scroll.
    seen_turns: usize,
    seen_pending: bool,
    seen_events: usize,
    tick: usize,
    last_ui_tick: Instant,
    should_quit: bool,
}

impl App {
    /// Build the app from optional user config, with the wall clock and OS randomness.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(config: Option<&AuraConfig>) -> Self {
        let defaults = AuraConfig::default();
        let config = config.unwrap_or(&defaults);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let conversation = ConversationEngine::new(Arc::clone(&clock), config.reply_delay());
        let telemetry = if config.start_paused() {
            TelemetryEngine::paused(clock, Box::new(ThreadRandom), config.tick_interval())
        } else {
            TelemetryEngine::new(clock, Box::new(ThreadRandom), config.tick_interval())
        };
        let view = ViewState::new(config.theme(), config.ui_options());

        tracing::info!(
            theme = config.theme().label(),
            reply_delay_ms = config.reply_delay().as_millis() as u64,
            interval_ms = config.tick_interval().as_millis() as u64,
            streaming = telemetry.is_streaming(),
            "App initialized"
        );
        Self::from_parts(conversation, telemetry, view)
    }

    /// Assemble an app from pre-built engines (used by tests to inject clocks and randomness).
    #[must_use]
    pub fn from_parts(
        conversation: ConversationEngine,
        telemetry: TelemetryEngine,
        view: ViewState,
    ) -> Self {
        let seen_turns = conversation.turns().len();
        let seen_pending = conversation.is_pending();
        let seen_events = telemetry.events().len();
        Self {
            conversation,
            telemetry,
            view,
            draft: String::new(),
            seen_turns,
            seen_pending,
            seen_events,
            tick: 0,
            last_ui_tick: Instant::now(),
            should_quit: false,
        }
    }

    /// Drain fired timers and advance animation state. Call once per frame.
    pub fn tick(&mut self) {
        self.conversation.process_events();
        self.telemetry.process_events();
        self.sync_scroll();

        let now = Instant::now();
        if now.duration_since(self.last_ui_tick) >= UI_TICK {
            self.last_ui_tick = now;
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Pin a panel to its newest entry whenever its content changed.
    fn sync_scroll(&mut self) {
        let turns = self.conversation.turns().len();
        let pending = self.conversation.is_pending();
        if turns != self.seen_turns || pending != self.seen_pending {
            self.seen_turns = turns;
            self.seen_pending = pending;
            self.view.chat_scroll = ScrollState::AutoBottom;
        }

        let events = self.telemetry.events().len();
        if events != self.seen_events {
            self.seen_events = events;
            self.view.monitor_scroll = ScrollState::AutoBottom;
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn conversation(&self) -> &ConversationEngine {
        &self.conversation
    }

    #[must_use]
    pub fn telemetry(&self) -> &TelemetryEngine {
        &self.telemetry
    }

    /// Mutable telemetry access for drivers that wait on ticks directly.
    pub fn telemetry_mut(&mut self) -> &mut TelemetryEngine {
        &mut self.telemetry
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.view.theme
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.view.tab
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    pub fn toggle_theme(&mut self) {
        self.view.theme = self.view.theme.toggle();
        tracing::debug!(theme = self.view.theme.label(), "theme toggled");
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.view.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.view.tab = self.view.tab.next();
    }

    // Draft editing

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn insert_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn insert_str(&mut self, text: &str) {
        self.draft.push_str(text);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Submit the draft. It is cleared only when the engine accepts it.
    pub fn submit_draft(&mut self) -> Submission {
        let outcome = self.conversation.submit(&self.draft);
        if outcome == Submission::Accepted {
            self.draft.clear();
            self.sync_scroll();
        }
        outcome
    }

    // Monitor intents

    pub fn toggle_streaming(&mut self) {
        self.telemetry.toggle();
    }

    pub fn clear_events(&mut self) {
        self.telemetry.clear();
        self.sync_scroll();
    }

    // Scrolling (active panel)

    pub fn scroll_up(&mut self) {
        let max = self.view.scroll_max(self.view.tab);
        let scroll = self.view.active_scroll_mut();
        *scroll = scroll.scroll_up(SCROLL_STEP, max);
    }

    pub fn scroll_down(&mut self) {
        let scroll = self.view.active_scroll_mut();
        *scroll = scroll.scroll_down(SCROLL_STEP);
    }

    pub fn scroll_to_bottom(&mut self) {
        *self.view.active_scroll_mut() = ScrollState::AutoBottom;
    }

    /// Record how far `tab` can scroll, as measured by the renderer.
    pub fn update_scroll_max(&mut self, tab: Tab, max: u16) {
        self.view.set_scroll_max(tab, max);
    }

    // Lifecycle

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cancel all scheduled work. Dropping the app has the same effect.
    pub fn shutdown(&mut self) {
        let cancelled_reply = self.conversation.cancel_pending();
        self.telemetry.stop();
        tracing::info!(cancelled_reply, "App shut down");
    }
}
