//! Maze Chase (workspace facade crate).
//!
//! Re-exports the workspace crates as `maze_chase::{core,input,term,types}`
//! and holds the host-side pieces of the binary: environment configuration
//! and log setup.

pub mod config;
pub mod logging;

pub use maze_chase_core as core;
pub use maze_chase_input as input;
pub use maze_chase_term as term;
pub use maze_chase_types as types;
