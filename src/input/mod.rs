//! Input handling - translates terminal key events into game intents.

pub mod map;

pub use map::{action_for_key, is_acknowledge, should_quit};
