//! Pellet set - one consumable point per open cell center.

use crate::entity::Rect;
use crate::maze::MazeGrid;
use crate::types::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PelletSet {
    /// Row-major by construction, so no duplicates.
    points: Vec<Point>,
}

impl PelletSet {
    /// One pellet at the center of every open cell.
    pub fn for_maze(maze: &MazeGrid) -> Self {
        Self {
            points: maze
                .open_cells()
                .map(|(gx, gy)| maze.cell_center(gx, gy))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Remove every pellet inside `area`, returning how many were removed.
    ///
    /// Allocation-free; relative order of the remaining pellets is kept.
    pub fn remove_within(&mut self, area: &Rect) -> u32 {
        let before = self.points.len();
        self.points.retain(|p| !area.contains_point(*p));
        (before - self.points.len()) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeLayout;

    #[test]
    fn test_one_pellet_per_open_cell() {
        let layout = MazeLayout::classic().unwrap();
        let pellets = PelletSet::for_maze(&layout.grid);
        assert_eq!(pellets.len(), layout.grid.open_cells().count());
        for p in pellets.points() {
            let (gx, gy) = layout.grid.pixel_to_grid(p.x, p.y);
            assert!(layout.grid.is_walkable(gx, gy));
            assert_eq!(*p, layout.grid.cell_center(gx, gy));
        }
    }

    #[test]
    fn test_remove_within_counts_removed() {
        let layout = MazeLayout::classic().unwrap();
        let mut pellets = PelletSet::for_maze(&layout.grid);
        let before = pellets.len();

        let area = Rect::around(Point::new(90, 90), 20);
        assert_eq!(pellets.remove_within(&area), 1);
        assert_eq!(pellets.len(), before - 1);
        assert!(!pellets.contains(Point::new(90, 90)));

        // Already eaten.
        assert_eq!(pellets.remove_within(&area), 0);
    }
}
