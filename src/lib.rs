//! shelfview: a terminal catalog browser.
//!
//! Layered the conventional way: data sources → repository → state
//! holders → views. The catalog is a static JSON document (embedded or on
//! disk), favorites persist locally as a JSON id set, and the state
//! holders in [`state`] derive each screen's state from those inputs over
//! watch channels.

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod state;
pub mod ui;
