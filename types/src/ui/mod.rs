//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod scroll;
mod theme;
mod view_state;

pub use scroll::ScrollState;
pub use theme::{Tab, Theme};
pub use view_state::{UiOptions, ViewState};
