//! Terminal input module (game-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameInput`] and buffers them so
//! that each game tick consumes at most one input.

pub mod map;
pub mod queue;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{InputQueue, INPUT_QUEUE_CAPACITY};
