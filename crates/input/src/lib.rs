//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and runs the
//! blocking listener thread that feeds the merged game event stream.

pub mod listener;
pub mod map;

pub use blockfall_types as types;

pub use listener::spawn_listener;
pub use map::map_key;
