//! Maze module - static walkable/wall map
//!
//! The maze is an immutable row-major grid of [`CellKind`]s surrounded by a
//! wall border. Layouts are authored as text, one string per row:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `1` `#` | wall |
//! | `0` `.` space | open |
//! | `P` | open, agent spawn (exactly one) |
//! | `G` | open, pursuer spawn (1 to 4, named in row-major order) |
//!
//! Coordinates: `(gx, gy)` where gx ranges over columns (left to right) and
//! gy over rows (top to bottom).

use arrayvec::ArrayVec;

use crate::error::MazeError;
use crate::types::{CellKind, Point, CELL_SIZE, MAX_PURSUERS};

/// Built-in layout.
pub const CLASSIC_LAYOUT: [&str; 7] = [
    "1111111111",
    "1P00000G01",
    "1011110101",
    "1010G00101",
    "1010110101",
    "1G0000G001",
    "1111111111",
];

/// Immutable maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    /// Flat array of cells, row-major order (gy * cols + gx)
    cells: Vec<CellKind>,
    cols: i32,
    rows: i32,
    cell_size: i32,
}

impl MazeGrid {
    /// Build a grid from rows of cells, validating shape and border.
    pub fn from_rows(rows: &[Vec<CellKind>], cell_size: i32) -> Result<Self, MazeError> {
        if cell_size <= 0 {
            return Err(MazeError::InvalidCellSize(cell_size));
        }
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.len();
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (gy, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRow {
                    row: gy,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        let grid = Self {
            cells,
            cols: width as i32,
            rows: rows.len() as i32,
            cell_size,
        };
        grid.check_border()?;
        Ok(grid)
    }

    fn check_border(&self) -> Result<(), MazeError> {
        for gy in 0..self.rows {
            for gx in 0..self.cols {
                let on_border = gx == 0 || gy == 0 || gx == self.cols - 1 || gy == self.rows - 1;
                if on_border && self.cell(gx, gy) != Some(CellKind::Wall) {
                    return Err(MazeError::OpenBorder {
                        x: gx as usize,
                        y: gy as usize,
                    });
                }
            }
        }
        Ok(())
    }

    /// Calculate flat index from (gx, gy) coordinates
    #[inline(always)]
    fn index(&self, gx: i32, gy: i32) -> Option<usize> {
        if gx < 0 || gx >= self.cols || gy < 0 || gy >= self.rows {
            return None;
        }
        Some((gy as usize) * (self.cols as usize) + (gx as usize))
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Play-field width in pixels.
    pub fn pixel_width(&self) -> i32 {
        self.cols * self.cell_size
    }

    /// Play-field height in pixels.
    pub fn pixel_height(&self) -> i32 {
        self.rows * self.cell_size
    }

    /// Get cell at (gx, gy), `None` when out of range.
    pub fn cell(&self, gx: i32, gy: i32) -> Option<CellKind> {
        self.index(gx, gy).map(|i| self.cells[i])
    }

    /// False for walls and for anything outside the grid.
    pub fn is_walkable(&self, gx: i32, gy: i32) -> bool {
        matches!(self.cell(gx, gy), Some(CellKind::Open))
    }

    /// Grid cell containing a pixel (floor division).
    pub fn pixel_to_grid(&self, px: i32, py: i32) -> (i32, i32) {
        (px.div_euclid(self.cell_size), py.div_euclid(self.cell_size))
    }

    pub fn cell_center(&self, gx: i32, gy: i32) -> Point {
        Point::cell_center(gx, gy, self.cell_size)
    }

    /// Whether a pixel lies inside the play field.
    pub fn contains_pixel(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.pixel_width() && p.y >= 0 && p.y < self.pixel_height()
    }

    /// Whether the cell under a pixel is walkable.
    pub fn is_walkable_pixel(&self, p: Point) -> bool {
        let (gx, gy) = self.pixel_to_grid(p.x, p.y);
        self.contains_pixel(p) && self.is_walkable(gx, gy)
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_open())
            .map(move |(i, _)| ((i as i32) % cols, (i as i32) / cols))
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

/// A parsed layout: the grid plus spawn cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeLayout {
    pub grid: MazeGrid,
    pub agent_spawn: (i32, i32),
    pub pursuer_spawns: ArrayVec<(i32, i32), MAX_PURSUERS>,
}

impl MazeLayout {
    /// The built-in layout at the default cell size.
    pub fn classic() -> Result<Self, MazeError> {
        Self::parse_rows(&CLASSIC_LAYOUT, CELL_SIZE)
    }

    /// Parse layout text (one row per line, blank lines ignored).
    pub fn parse(text: &str, cell_size: i32) -> Result<Self, MazeError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .collect();
        Self::parse_rows(&rows, cell_size)
    }

    pub fn parse_rows(rows: &[&str], cell_size: i32) -> Result<Self, MazeError> {
        let mut cells = Vec::with_capacity(rows.len());
        let mut agent_spawn = None;
        let mut pursuer_spawns = ArrayVec::new();

        for (gy, line) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (gx, symbol) in line.chars().enumerate() {
                let at = (gx as i32, gy as i32);
                let kind = match symbol {
                    '1' | '#' => CellKind::Wall,
                    '0' | '.' | ' ' => CellKind::Open,
                    'P' => {
                        if agent_spawn.replace(at).is_some() {
                            return Err(MazeError::DuplicateAgentSpawn { x: gx, y: gy });
                        }
                        CellKind::Open
                    }
                    'G' => {
                        if pursuer_spawns.try_push(at).is_err() {
                            return Err(MazeError::TooManyPursuers { max: MAX_PURSUERS });
                        }
                        CellKind::Open
                    }
                    other => {
                        return Err(MazeError::InvalidSymbol {
                            symbol: other,
                            x: gx,
                            y: gy,
                        })
                    }
                };
                row.push(kind);
            }
            cells.push(row);
        }

        let grid = MazeGrid::from_rows(&cells, cell_size)?;
        let agent_spawn = agent_spawn.ok_or(MazeError::MissingAgentSpawn)?;
        if pursuer_spawns.is_empty() {
            return Err(MazeError::MissingPursuerSpawn);
        }

        Ok(Self {
            grid,
            agent_spawn,
            pursuer_spawns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_box() -> MazeGrid {
        let rows = ["1111", "1001", "1001", "1111"];
        let cells: Vec<Vec<CellKind>> = rows
            .iter()
            .map(|r| {
                r.chars()
                    .map(|c| if c == '1' { CellKind::Wall } else { CellKind::Open })
                    .collect()
            })
            .collect();
        MazeGrid::from_rows(&cells, 60).unwrap()
    }

    #[test]
    fn test_index_calculation() {
        let grid = open_box();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(3, 0), Some(3));
        assert_eq!(grid.index(0, 1), Some(4));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(4, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_walkable_queries() {
        let grid = open_box();
        assert!(grid.is_walkable(1, 1));
        assert!(grid.is_walkable(2, 2));
        assert!(!grid.is_walkable(0, 1));
        assert!(!grid.is_walkable(-1, 1));
        assert!(!grid.is_walkable(1, 17));
    }

    #[test]
    fn test_pixel_to_grid_floors() {
        let grid = open_box();
        assert_eq!(grid.pixel_to_grid(90, 90), (1, 1));
        assert_eq!(grid.pixel_to_grid(59, 60), (0, 1));
        assert_eq!(grid.pixel_to_grid(-1, 0), (-1, 0));
    }

    #[test]
    fn test_open_cells_row_major() {
        let grid = open_box();
        let open: Vec<_> = grid.open_cells().collect();
        assert_eq!(open, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_classic_layout_spawns() {
        let layout = MazeLayout::classic().unwrap();
        assert_eq!(layout.grid.cols(), 10);
        assert_eq!(layout.grid.rows(), 7);
        assert_eq!(layout.agent_spawn, (1, 1));
        assert_eq!(
            layout.pursuer_spawns.as_slice(),
            &[(7, 1), (4, 3), (1, 5), (6, 5)]
        );
        assert!(layout.grid.is_walkable(1, 1));
    }
}
