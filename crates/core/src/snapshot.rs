use arrayvec::ArrayVec;

use crate::types::{CellKind, EntityKind, Point, MAX_PURSUERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntitySnapshot {
    pub kind: EntityKind,
    pub position: Point,
    pub radius: i32,
}

impl Default for EntitySnapshot {
    fn default() -> Self {
        Self {
            kind: EntityKind::Agent,
            position: Point::default(),
            radius: 0,
        }
    }
}

/// Read-only view of one tick, handed to the presentation layer.
///
/// Reuse one snapshot across frames with `GameState::snapshot_into`; the
/// cell and pellet buffers keep their allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub cols: i32,
    pub rows: i32,
    pub cell_size: i32,
    /// Row-major maze cells.
    pub cells: Vec<CellKind>,
    pub pellets: Vec<Point>,
    pub agent: EntitySnapshot,
    pub pursuers: ArrayVec<EntitySnapshot, MAX_PURSUERS>,
    pub score: u32,
    pub lives: u32,
    pub running: bool,
    pub game_over: bool,
    pub tick: u64,
}

impl GameSnapshot {
    pub fn cell(&self, gx: i32, gy: i32) -> Option<CellKind> {
        if gx < 0 || gx >= self.cols || gy < 0 || gy >= self.rows {
            return None;
        }
        self.cells
            .get((gy as usize) * (self.cols as usize) + (gx as usize))
            .copied()
    }

    /// Agent first, then pursuers in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = &EntitySnapshot> {
        std::iter::once(&self.agent).chain(self.pursuers.iter())
    }
}
