//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders a [`core::GameSnapshot`] into a simple framebuffer that is then
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation concerns
//! - Only write changed cells each tick
//! - Scale the pixel play field onto terminal cells (2 columns per row by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use maze_chase_core as core;
pub use maze_chase_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{entity_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
