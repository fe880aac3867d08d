//! Mobile entity - the movement and collision primitive shared by the agent
//! and the pursuers.
//!
//! Movement is discrete: one call to [`MobileEntity::attempt_move`] moves at
//! most one cell per axis. It is the only code path that changes an entity's
//! position during play, so the agent and the pursuers obey identical wall
//! rules.

use crate::maze::MazeGrid;
use crate::types::{EntityKind, Point};

/// Axis-aligned box, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Square box of half-size `radius` centered on `center`.
    pub fn around(center: Point, radius: i32) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            w: radius * 2,
            h: radius * 2,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Overlap test; boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Capability shared by everything that moves through the maze.
pub trait Mobile {
    fn position(&self) -> Point;

    fn radius(&self) -> i32;

    fn bounds(&self) -> Rect;

    /// Try one discrete step; `dx`, `dy` in `-1..=1`. Returns whether it moved.
    fn attempt_move(&mut self, dx: i32, dy: i32, maze: &MazeGrid) -> bool;

    fn overlaps(&self, other: &impl Mobile) -> bool
    where
        Self: Sized,
    {
        self.bounds().intersects(&other.bounds())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileEntity {
    kind: EntityKind,
    position: Point,
    radius: i32,
    bounds: Rect,
}

impl MobileEntity {
    pub fn new(kind: EntityKind, position: Point, radius: i32) -> Self {
        Self {
            kind,
            position,
            radius,
            bounds: Rect::around(position, radius),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Place the entity without legality checks (spawn and reset only).
    pub fn place(&mut self, position: Point) {
        self.position = position;
        self.bounds = Rect::around(position, self.radius);
    }
}

impl Mobile for MobileEntity {
    fn position(&self) -> Point {
        self.position
    }

    fn radius(&self) -> i32 {
        self.radius
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Diagonal steps are accepted and only the destination cell is checked,
    /// so a diagonal may pass between two walls touching at a corner.
    fn attempt_move(&mut self, dx: i32, dy: i32, maze: &MazeGrid) -> bool {
        let candidate = self.position.offset_cells(dx, dy, maze.cell_size());
        if !maze.contains_pixel(candidate) {
            return false;
        }

        let (gx, gy) = maze.pixel_to_grid(candidate.x, candidate.y);
        if !maze.is_walkable(gx, gy) {
            return false;
        }

        self.place(candidate);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeLayout;

    fn agent_at(x: i32, y: i32) -> MobileEntity {
        MobileEntity::new(EntityKind::Agent, Point::new(x, y), 20)
    }

    #[test]
    fn test_rect_around_center() {
        let r = Rect::around(Point::new(90, 90), 20);
        assert_eq!(r, Rect { x: 70, y: 70, w: 40, h: 40 });
        assert!(r.contains_point(Point::new(90, 90)));
        assert!(r.contains_point(Point::new(70, 70)));
        assert!(!r.contains_point(Point::new(110, 90)));
    }

    #[test]
    fn test_rect_edge_contact_is_not_overlap() {
        let a = Rect::around(Point::new(90, 90), 20);
        let b = Rect::around(Point::new(130, 90), 20);
        let c = Rect::around(Point::new(129, 90), 20);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_attempt_move_into_open_cell() {
        let layout = MazeLayout::classic().unwrap();
        let mut e = agent_at(90, 90);

        assert!(e.attempt_move(1, 0, &layout.grid));
        assert_eq!(e.position(), Point::new(150, 90));
        assert_eq!(e.bounds(), Rect::around(Point::new(150, 90), 20));
    }

    #[test]
    fn test_attempt_move_into_wall_is_rejected() {
        let layout = MazeLayout::classic().unwrap();
        let mut e = agent_at(90, 90);

        assert!(!e.attempt_move(-1, 0, &layout.grid));
        assert!(!e.attempt_move(0, -1, &layout.grid));
        assert_eq!(e.position(), Point::new(90, 90));
        assert_eq!(e.bounds(), Rect::around(Point::new(90, 90), 20));
    }

    #[test]
    fn test_attempt_move_outside_play_field_is_rejected() {
        let layout = MazeLayout::classic().unwrap();
        // Not reachable in play, but the bounds check must hold on its own.
        let mut e = agent_at(30, 30);
        assert!(!e.attempt_move(-1, -1, &layout.grid));
        assert_eq!(e.position(), Point::new(30, 30));
    }

    #[test]
    fn test_place_resyncs_bounds() {
        let mut e = agent_at(90, 90);
        e.place(Point::new(270, 330));
        assert_eq!(e.bounds(), Rect::around(Point::new(270, 330), 20));
    }
}
