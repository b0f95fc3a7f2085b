//! Terminal views over the state holders.
//!
//! Views render watch-channel snapshots and feed user intents (search
//! edits, selection, favorite toggles, navigation, retry) back into the
//! holders; no screen state lives in the view layer beyond focus and
//! cursor position.

pub mod app;
mod events;
mod layout;
mod render;
pub mod runtime;
mod terminal_guard;
mod theme;
