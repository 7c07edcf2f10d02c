//! Simulated telemetry stream.
//!
//! While streaming, a periodic producer appends one synthetic event per
//! interval, picked uniformly from a fixed catalog. The log can be paused,
//! resumed, and cleared independently of the streaming state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use aura_types::{EventMeta, LogEvent, LogLevel};

use crate::clock::Clock;
use crate::random::{RandomSource, session_id};
use crate::schedule::{TaskHandle, spawn_every};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2000);

/// Upper bound on ticks applied per `process_events` call.
const TICK_BUDGET: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Streaming,
    Paused,
}

impl StreamState {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StreamState::Streaming => "Streaming",
            StreamState::Paused => "Paused",
        }
    }
}

/// Synthetic event shapes the producer draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTemplate {
    Heartbeat,
    ConfidenceDip,
    ToolCall,
    VendorTimeout,
}

impl EventTemplate {
    pub const CATALOG: [EventTemplate; 4] = [
        EventTemplate::Heartbeat,
        EventTemplate::ConfidenceDip,
        EventTemplate::ToolCall,
        EventTemplate::VendorTimeout,
    ];

    #[must_use]
    pub const fn level(self) -> LogLevel {
        match self {
            EventTemplate::Heartbeat | EventTemplate::ToolCall => LogLevel::Info,
            EventTemplate::ConfidenceDip => LogLevel::Warn,
            EventTemplate::VendorTimeout => LogLevel::Error,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            EventTemplate::Heartbeat => "Heartbeat OK",
            EventTemplate::ConfidenceDip => "ASR confidence dipped",
            EventTemplate::ToolCall => "Tool call success",
            EventTemplate::VendorTimeout => "Vendor API timeout",
        }
    }

    /// Pick one template uniformly.
    pub fn choose(random: &mut dyn RandomSource) -> Self {
        Self::CATALOG[random.below(Self::CATALOG.len() as u32) as usize]
    }

    /// Draw the random fields for this template.
    ///
    /// - heartbeat `latency_ms` in `[10, 39]`
    /// - confidence dip `confidence` in `[0.70, 0.90]`, two decimals
    /// - tool call `took_ms` in `[120, 199]`
    pub fn meta(self, random: &mut dyn RandomSource) -> EventMeta {
        match self {
            EventTemplate::Heartbeat => EventMeta::new().with("latency_ms", 10 + random.below(30)),
            EventTemplate::ConfidenceDip => {
                let confidence = 0.7 + random.next_f64() * 0.2;
                EventMeta::new().with("confidence", round_to_hundredths(confidence))
            }
            EventTemplate::ToolCall => EventMeta::new()
                .with("tool", "search")
                .with("took_ms", 120 + random.below(80)),
            EventTemplate::VendorTimeout => EventMeta::new().with("retry_in", "2s"),
        }
    }

    pub fn instantiate(self, random: &mut dyn RandomSource, timestamp: String) -> LogEvent {
        LogEvent::new(
            self.level(),
            self.message(),
            timestamp,
            Some(self.meta(random)),
        )
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Generation(u64);

#[derive(Debug, Clone)]
struct Tick {
    generation: Generation,
}

/// The running periodic producer. Existence means the engine is streaming.
#[derive(Debug)]
struct Producer {
    generation: Generation,
    task: TaskHandle,
}

pub struct TelemetryEngine {
    events: Vec<LogEvent>,
    producer: Option<Producer>,
    interval: Duration,
    next_generation: u64,
    clock: Arc<dyn Clock>,
    random: Box<dyn RandomSource>,
    tx: mpsc::UnboundedSender<Tick>,
    rx: mpsc::UnboundedReceiver<Tick>,
}

impl std::fmt::Debug for TelemetryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryEngine")
            .field("events", &self.events.len())
            .field("state", &self.state())
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl TelemetryEngine {
    /// Engine seeded with the two startup events, streaming.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, random: Box<dyn RandomSource>, interval: Duration) -> Self {
        let mut engine = Self::paused(clock, random, interval);
        engine.start();
        engine
    }

    /// Engine seeded with the two startup events, not yet streaming.
    #[must_use]
    pub fn paused(
        clock: Arc<dyn Clock>,
        mut random: Box<dyn RandomSource>,
        interval: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = session_id(random.as_mut());
        let now = clock.now_label();
        let events = vec![
            LogEvent::new(
                LogLevel::Info,
                "Agent initialized",
                now.clone(),
                Some(EventMeta::new().with("session", session)),
            ),
            LogEvent::new(LogLevel::Info, "Listening for user intent", now, None),
        ];
        Self {
            events,
            producer: None,
            interval,
            next_generation: 0,
            clock,
            random,
            tx,
            rx,
        }
    }

    #[must_use]
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    #[must_use]
    pub fn state(&self) -> StreamState {
        if self.producer.is_some() {
            StreamState::Streaming
        } else {
            StreamState::Paused
        }
    }

    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.producer.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begin the periodic producer. No-op if already streaming.
    pub fn start(&mut self) {
        if self.producer.is_some() {
            return;
        }
        let generation = Generation(self.next_generation);
        self.next_generation = self.next_generation.wrapping_add(1);
        let task = spawn_every(self.interval, self.tx.clone(), Tick { generation });
        self.producer = Some(Producer { generation, task });
        tracing::debug!(generation = generation.0, "telemetry streaming started");
    }

    /// Halt the periodic producer. No-op if already paused.
    pub fn stop(&mut self) {
        if let Some(producer) = self.producer.take() {
            producer.task.abort();
            tracing::debug!(generation = producer.generation.0, "telemetry streaming paused");
        }
    }

    pub fn toggle(&mut self) {
        match self.state() {
            StreamState::Streaming => self.stop(),
            StreamState::Paused => self.start(),
        }
    }

    /// Drop every event. Streaming state is untouched.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Apply ticks that have fired. Returns how many events were appended.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        for _ in 0..TICK_BUDGET {
            match self.rx.try_recv() {
                Ok(tick) => {
                    if self.apply(&tick) {
                        applied += 1;
                    }
                }
                Err(mpsc::error::TryRecvError::Empty | mpsc::error::TryRecvError::Disconnected) => {
                    break;
                }
            }
        }
        applied
    }

    /// Wait for the next producer tick and apply it.
    ///
    /// Returns `false` immediately when paused.
    pub async fn wait_for_update(&mut self) -> bool {
        while self.producer.is_some() {
            let Some(tick) = self.rx.recv().await else {
                return false;
            };
            if self.apply(&tick) {
                return true;
            }
        }
        false
    }

    fn apply(&mut self, tick: &Tick) -> bool {
        let is_current = self
            .producer
            .as_ref()
            .is_some_and(|producer| producer.generation == tick.generation);
        if !is_current {
            tracing::trace!(generation = tick.generation.0, "stale tick discarded");
            return false;
        }

        let template = EventTemplate::choose(self.random.as_mut());
        let event = template.instantiate(self.random.as_mut(), self.clock.now_label());
        tracing::trace!(level = %event.level(), text = event.message(), "telemetry event");
        self.events.push(event);
        true
    }
}
