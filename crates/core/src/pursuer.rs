//! Pursuer behavior - per-pursuer targeting layered on [`MobileEntity`].
//!
//! Pursuers are greedy: each tick they step toward their target along every
//! axis where the target is more than one cell away, and simply stay put when
//! that step hits a wall. There is no path search, so a pursuer can stall
//! behind a wall indefinitely.

use crate::entity::{Mobile, MobileEntity, Rect};
use crate::maze::MazeGrid;
use crate::types::{EntityKind, Point, PursuerMode, PursuerName};

/// Greedy chase step from `from` toward `target`.
///
/// Each axis is decided independently, so both components can be nonzero
/// and the resulting attempt is diagonal.
pub fn chase_step(from: Point, target: Point, cell_size: i32) -> (i32, i32) {
    let dx = if (target.x - from.x).abs() > cell_size {
        (target.x - from.x).signum()
    } else {
        0
    };
    let dy = if (target.y - from.y).abs() > cell_size {
        (target.y - from.y).signum()
    } else {
        0
    };
    (dx, dy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pursuer {
    name: PursuerName,
    entity: MobileEntity,
    mode: PursuerMode,
    target: Option<Point>,
    spawn: Point,
}

impl Pursuer {
    pub fn new(name: PursuerName, spawn: Point, radius: i32) -> Self {
        Self {
            name,
            entity: MobileEntity::new(EntityKind::Pursuer(name), spawn, radius),
            mode: PursuerMode::Chase,
            target: None,
            spawn,
        }
    }

    pub fn name(&self) -> PursuerName {
        self.name
    }

    pub fn mode(&self) -> PursuerMode {
        self.mode
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    pub fn spawn(&self) -> Point {
        self.spawn
    }

    pub fn entity(&self) -> &MobileEntity {
        &self.entity
    }

    /// Retarget and take this tick's step. Returns whether the pursuer moved.
    pub fn update(&mut self, target: Point, maze: &MazeGrid) -> bool {
        self.target = Some(target);
        match self.mode {
            PursuerMode::Chase => {
                let (dx, dy) = chase_step(self.entity.position(), target, maze.cell_size());
                if dx == 0 && dy == 0 {
                    return false;
                }
                self.entity.attempt_move(dx, dy, maze)
            }
        }
    }

    /// Back to the spawn point, forgetting the current target.
    pub fn reset(&mut self) {
        self.place(self.spawn);
    }

    /// Place without legality checks; the spawn point is kept.
    pub(crate) fn place(&mut self, position: Point) {
        self.entity.place(position);
        self.target = None;
    }
}

impl Mobile for Pursuer {
    fn position(&self) -> Point {
        self.entity.position()
    }

    fn radius(&self) -> i32 {
        self.entity.radius()
    }

    fn bounds(&self) -> Rect {
        self.entity.bounds()
    }

    fn attempt_move(&mut self, dx: i32, dy: i32, maze: &MazeGrid) -> bool {
        self.entity.attempt_move(dx, dy, maze)
    }
}
