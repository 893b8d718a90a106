//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ClockAction`] and
//! recognizes the quit keys. Kept separate from the display so the key map
//! can be tested without a terminal.

pub mod map;

pub use bin_clock_types as types;

pub use map::{handle_key_event, should_quit};
