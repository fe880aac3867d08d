//! Error types for maze loading and simulation.

use thiserror::Error;

use crate::types::EntityKind;

/// Malformed maze layout. Fatal at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze layout has no cells")]
    Empty,
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(i32),
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("border cell ({x}, {y}) is not a wall")]
    OpenBorder { x: usize, y: usize },
    #[error("unknown layout symbol {symbol:?} at ({x}, {y})")]
    InvalidSymbol { symbol: char, x: usize, y: usize },
    #[error("layout has no agent spawn ('P')")]
    MissingAgentSpawn,
    #[error("second agent spawn at ({x}, {y})")]
    DuplicateAgentSpawn { x: usize, y: usize },
    #[error("layout has no pursuer spawn ('G')")]
    MissingPursuerSpawn,
    #[error("layout has more than {max} pursuer spawns")]
    TooManyPursuers { max: usize },
}

/// Errors surfaced by the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),
    /// An entity resolved to a cell it can never legally occupy. Indicates a
    /// movement bug; callers should abort rather than continue.
    #[error("{entity} left the walkable maze at pixel ({x}, {y})")]
    InvariantViolation { entity: EntityKind, x: i32, y: i32 },
}
