//! Simulated chat turn-taking.
//!
//! A submitted user turn is appended immediately; the assistant reply is
//! appended after a fixed delay. While a reply is outstanding the engine is
//! *pending* and further submissions are silently dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use aura_types::{ChatTurn, NonEmptyStaticStr, NonEmptyString};

use crate::clock::Clock;
use crate::schedule::{TaskHandle, spawn_after};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(900);

pub const WELCOME_MESSAGE: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Hi! I'm your AI copilot. Ask me anything ✨");

/// Upper bound on replies applied per `process_events` call.
const REPLY_BUDGET: usize = 16;

/// Outcome of [`ConversationEngine::submit`]. Rejections are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    /// Input was empty or whitespace-only.
    Empty,
    /// A reply is still outstanding.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExchangeId(u64);

#[derive(Debug)]
struct ReplyReady {
    exchange: ExchangeId,
}

/// An outstanding exchange. Existence means the engine is pending.
#[derive(Debug)]
struct PendingReply {
    exchange: ExchangeId,
    prompt: NonEmptyString,
    task: TaskHandle,
}

/// Canned assistant reply echoing the user's text.
#[must_use]
pub fn reply_template(prompt: &str) -> String {
    format!(
        "You said: \"{prompt}\"\n\nHere's a concise answer placeholder. Connect your backend when ready."
    )
}

pub struct ConversationEngine {
    turns: Vec<ChatTurn>,
    pending: Option<PendingReply>,
    reply_delay: Duration,
    next_exchange: u64,
    clock: Arc<dyn Clock>,
    tx: mpsc::UnboundedSender<ReplyReady>,
    rx: mpsc::UnboundedReceiver<ReplyReady>,
}

impl std::fmt::Debug for ConversationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationEngine")
            .field("turns", &self.turns.len())
            .field("pending", &self.is_pending())
            .field("reply_delay", &self.reply_delay)
            .finish_non_exhaustive()
    }
}

impl ConversationEngine {
    /// Fresh engine seeded with the assistant welcome turn.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, reply_delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let welcome = ChatTurn::assistant(WELCOME_MESSAGE.as_str(), clock.now_label());
        Self {
            turns: vec![welcome],
            pending: None,
            reply_delay,
            next_exchange: 0,
            clock,
            tx,
            rx,
        }
    }

    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Append a user turn and schedule the assistant reply.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, text: &str) -> Submission {
        if self.pending.is_some() {
            tracing::debug!("submit ignored: reply pending");
            return Submission::Busy;
        }
        let Ok(prompt) = NonEmptyString::trimmed(text) else {
            tracing::debug!("submit ignored: empty input");
            return Submission::Empty;
        };

        self.turns
            .push(ChatTurn::user(prompt.clone(), self.clock.now_label()));

        let exchange = ExchangeId(self.next_exchange);
        self.next_exchange = self.next_exchange.wrapping_add(1);
        let task = spawn_after(self.reply_delay, self.tx.clone(), ReplyReady { exchange });
        self.pending = Some(PendingReply {
            exchange,
            prompt,
            task,
        });
        tracing::debug!(exchange = exchange.0, "user turn appended, reply scheduled");
        Submission::Accepted
    }

    /// Abort the outstanding reply, if any. No assistant turn is appended.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.task.abort();
                tracing::debug!(exchange = pending.exchange.0, "pending reply cancelled");
                true
            }
            None => false,
        }
    }

    /// Apply any replies whose timers have fired. Returns how many turns were appended.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        for _ in 0..REPLY_BUDGET {
            match self.rx.try_recv() {
                Ok(ready) => {
                    if self.complete(&ready) {
                        applied += 1;
                    }
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                // The engine holds a sender, so the channel cannot close while we exist.
                Err(mpsc::error::TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Wait for the outstanding reply and apply it.
    ///
    /// Returns `false` immediately when nothing is pending.
    pub async fn wait_for_update(&mut self) -> bool {
        while self.pending.is_some() {
            let Some(ready) = self.rx.recv().await else {
                return false;
            };
            if self.complete(&ready) {
                return true;
            }
        }
        false
    }

    fn complete(&mut self, ready: &ReplyReady) -> bool {
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.exchange == ready.exchange);
        if !is_current {
            tracing::debug!(exchange = ready.exchange.0, "stale reply discarded");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let reply = reply_template(pending.prompt.as_str());
        self.turns
            .push(ChatTurn::assistant(reply, self.clock.now_label()));
        tracing::debug!(exchange = pending.exchange.0, "assistant turn appended");
        true
    }
}
