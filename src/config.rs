//! Run configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MAZE_CHASE_TICK_MS` | 33 | fixed tick interval |
//! | `MAZE_CHASE_LAYOUT` | unset | layout file replacing the classic maze |
//! | `MAZE_CHASE_LOG_PATH` | unset | file receiving log output |
//! | `MAZE_CHASE_GAME_OVER_MS` | 3000 | how long the final frame stays up |
//!
//! Unparseable numbers fall back to the defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::MazeLayout;
use crate::types::{CELL_SIZE, GAME_OVER_HOLD_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tick_ms: u32,
    pub layout_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub game_over_hold_ms: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            layout_path: None,
            log_path: None,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        Self {
            tick_ms: number("MAZE_CHASE_TICK_MS", defaults.tick_ms).max(1),
            layout_path: path("MAZE_CHASE_LAYOUT"),
            log_path: path("MAZE_CHASE_LOG_PATH"),
            game_over_hold_ms: number("MAZE_CHASE_GAME_OVER_MS", defaults.game_over_hold_ms),
        }
    }

    /// The configured layout file, or the classic layout.
    pub fn load_layout(&self) -> Result<MazeLayout> {
        let Some(path) = &self.layout_path else {
            return Ok(MazeLayout::classic()?);
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading layout {}", path.display()))?;
        let layout = MazeLayout::parse(&text, CELL_SIZE)
            .with_context(|| format!("parsing layout {}", path.display()))?;
        Ok(layout)
    }
}
