//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and buffers them
//! in a fixed-capacity queue that the host loop drains once per tick.

pub mod map;
pub mod queue;

pub use maze_chase_types as types;

pub use map::{action_for_key, handle_key_event, should_quit};
pub use queue::InputQueue;
