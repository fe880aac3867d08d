//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Two coordinate spaces are in play:
//!
//! - **Grid**: `(gx, gy)` cell indices, `gx` in `0..cols`, `gy` in `0..rows`
//! - **Pixel**: continuous play-field coordinates, `CELL_SIZE` pixels per cell
//!
//! Entities and pellets always sit on cell centers: `g * CELL_SIZE + CELL_SIZE / 2`.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 60 | Pixels per maze cell |
//! | `ENTITY_RADIUS` | 20 | Collision radius of agent and pursuers |
//! | `PELLET_SCORE` | 10 | Points per pellet |
//! | `INITIAL_LIVES` | 3 | Lives at game start |
//! | `TICK_MS` | 33 | Fixed timestep interval (~30 Hz) |
//! | `GAME_OVER_HOLD_MS` | 3000 | How long the final screen stays up |
//!
//! # Examples
//!
//! ```
//! use maze_chase_types::{Direction, GameAction, Point, CELL_SIZE};
//!
//! assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
//! assert_eq!(GameAction::Quit.direction(), None);
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//!
//! assert_eq!(Point::cell_center(1, 1, CELL_SIZE), Point::new(90, 90));
//! ```

/// Pixels per maze cell.
pub const CELL_SIZE: i32 = 60;

/// Collision radius shared by the agent and every pursuer.
pub const ENTITY_RADIUS: i32 = 20;

/// Points awarded per pellet consumed.
pub const PELLET_SCORE: u32 = 10;

/// Lives at game start.
pub const INITIAL_LIVES: u32 = 3;

/// Fixed timestep interval in milliseconds (33ms ≈ 30 Hz)
pub const TICK_MS: u32 = 33;

/// Duration the "GAME OVER" frame stays on screen after the loop ends.
pub const GAME_OVER_HOLD_MS: u32 = 3000;

/// Upper bound on pursuers in a single maze.
pub const MAX_PURSUERS: usize = 4;

/// Upper bound on input actions applied in a single tick.
pub const MAX_INPUTS_PER_TICK: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_and_scoring_defaults() {
        assert_eq!(CELL_SIZE, 60);
        assert_eq!(ENTITY_RADIUS, 20);
        assert_eq!(PELLET_SCORE, 10);
        assert_eq!(INITIAL_LIVES, 3);
        assert_eq!(TICK_MS, 33);
        assert_eq!(MAX_PURSUERS, PursuerName::ALL.len());
    }

    #[test]
    fn cell_center_round_trips_to_its_cell() {
        let p = Point::cell_center(4, 1, CELL_SIZE);
        assert_eq!(p, Point::new(270, 90));
        assert_eq!((p.x / CELL_SIZE, p.y / CELL_SIZE), (4, 1));

        let next = p.offset_cells(-1, 1, CELL_SIZE);
        assert_eq!(next, Point::cell_center(3, 2, CELL_SIZE));
    }

    #[test]
    fn direction_deltas_are_axis_aligned() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?} must move along one axis", dir);
        }
    }
}

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel center of grid cell `(gx, gy)`.
    pub const fn cell_center(gx: i32, gy: i32, cell_size: i32) -> Self {
        Self {
            x: gx * cell_size + cell_size / 2,
            y: gy * cell_size + cell_size / 2,
        }
    }

    /// Offset by whole cells.
    pub const fn offset_cells(self, dx: i32, dy: i32, cell_size: i32) -> Self {
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Kind of a maze cell.
///
/// - **Wall**: impassable
/// - **Open**: walkable, holds a pellet at level start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Open,
}

impl CellKind {
    pub fn is_open(&self) -> bool {
        matches!(self, CellKind::Open)
    }
}

/// The four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One-cell grid step `(dx, dy)`; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Actions accepted by the simulation tick.
///
/// Produced by the terminal key map, but any source (scripted tests, replays)
/// can feed them to `GameState::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Step the agent one cell up
    MoveUp,
    /// Step the agent one cell down
    MoveDown,
    /// Step the agent one cell left
    MoveLeft,
    /// Step the agent one cell right
    MoveRight,
    /// Stop the game; the current tick still completes
    Quit,
}

impl GameAction {
    /// Movement direction, or `None` for non-movement actions.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Quit => None,
        }
    }
}

/// Pursuer identities, in spawn-assignment order.
///
/// Each pursuer has a distinct color in the terminal view:
/// - **Blinky**: red
/// - **Pinky**: pink
/// - **Inky**: cyan
/// - **Clyde**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PursuerName {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl PursuerName {
    pub const ALL: [PursuerName; 4] = [
        PursuerName::Blinky,
        PursuerName::Pinky,
        PursuerName::Inky,
        PursuerName::Clyde,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PursuerName::Blinky => "blinky",
            PursuerName::Pinky => "pinky",
            PursuerName::Inky => "inky",
            PursuerName::Clyde => "clyde",
        }
    }
}

/// Pursuer behavioral mode.
///
/// Only `Chase` is implemented; the field leaves room for scatter or
/// frightened modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PursuerMode {
    #[default]
    Chase,
}

/// Identity tag carried by every mobile entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Agent,
    Pursuer(PursuerName),
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Agent => "agent",
            EntityKind::Pursuer(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
