//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal, input devices, or I/O, making it:
//!
//! - **Deterministic**: pursuers follow a fixed greedy policy, no randomness
//! - **Testable**: every rule is reachable through [`GameState::advance`]
//! - **Portable**: any presentation layer can consume a [`GameSnapshot`]
//! - **Fast**: the tick path does not allocate
//!
//! # Module Structure
//!
//! - [`maze`]: wall/open grid, layout parsing and the classic layout
//! - [`pellets`]: consumable points at open cell centers
//! - [`entity`]: the shared movement and collision primitive
//! - [`pursuer`]: greedy chase behavior on top of [`MobileEntity`]
//! - [`game_state`]: score, lives and the fixed tick
//! - [`snapshot`]: read-only per-tick view for renderers
//!
//! # Game Rules
//!
//! - **Movement**: one cell per input, walls block, no partial moves
//! - **Pursuers**: step toward the agent on each axis more than one cell away
//! - **Pellets**: 10 points each, eaten when under the agent
//! - **Collisions**: each touching pursuer costs a life; everyone respawns
//! - **End**: quit requested or lives exhausted; there is no win condition
//!
//! # Example
//!
//! ```
//! use maze_chase_core::GameState;
//! use maze_chase_types::GameAction;
//!
//! let mut game = GameState::classic().unwrap();
//!
//! let report = game.advance(&[GameAction::MoveRight]).unwrap();
//! assert_eq!(report.agent_moves, 1);
//!
//! // Only the destination pellet is eaten; the agent left the spawn cell first.
//! assert_eq!(game.score(), 10);
//! ```

pub mod entity;
pub mod error;
pub mod game_state;
pub mod maze;
pub mod pellets;
pub mod pursuer;
pub mod snapshot;

pub use maze_chase_types as types;

// Re-export commonly used types for convenience
pub use entity::{Mobile, MobileEntity, Rect};
pub use error::{GameError, MazeError};
pub use game_state::{GameState, TickReport};
pub use maze::{MazeGrid, MazeLayout, CLASSIC_LAYOUT};
pub use pellets::PelletSet;
pub use pursuer::{chase_step, Pursuer};
pub use snapshot::{EntitySnapshot, GameSnapshot};
