//! Core domain types for Aura.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod chat;
mod proofs;
mod telemetry;
pub mod ui;

pub use chat::{ChatTurn, Role};
pub use proofs::{EmptyStringError, NonEmptyStaticStr, NonEmptyString};
pub use telemetry::{EventMeta, LogEvent, LogLevel, MetaValue};
