//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Pixel coordinates are scaled into terminal cells: one maze cell becomes a
//! `cell_w` x `cell_h` block, and pellets and entities are drawn at the
//! terminal cell under their pixel position.

use crate::core::{EntitySnapshot, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, EntityKind, Point, PursuerName};

const FLOOR_BG: Rgb = Rgb::new(0, 0, 0);
const WALL_FG: Rgb = Rgb::new(255, 255, 255);
const PELLET_FG: Rgb = Rgb::new(255, 255, 255);
const PANEL_MIN_W: u16 = 12;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the maze.
pub struct GameView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

/// Where the maze frame landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
    cell_w: u16,
    cell_h: u16,
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Reusing one framebuffer across frames keeps this allocation-free.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap, viewport);

        self.draw_border(fb, &layout);
        self.draw_maze(fb, snap, &layout);

        let pellet = CellStyle::new(PELLET_FG, FLOOR_BG);
        for &p in &snap.pellets {
            let (x, y) = to_screen(&layout, snap.cell_size, p);
            fb.put_char(x, y, '·', pellet);
        }

        // Pursuers first so the agent stays visible on a shared cell.
        for entity in snap.pursuers.iter().chain(std::iter::once(&snap.agent)) {
            self.draw_entity(fb, snap, &layout, entity);
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            self.draw_overlay_text(fb, &layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Centered frame; drops to one column per cell when the preferred scale
    /// does not fit.
    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let cols = snap.cols.max(0) as u16;
        let rows = snap.rows.max(0) as u16;

        let fits = |cw: u16, ch: u16| {
            cols.saturating_mul(cw).saturating_add(2) <= viewport.width
                && rows.saturating_mul(ch).saturating_add(2) <= viewport.height
        };
        let (cell_w, cell_h) = if fits(self.cell_w, self.cell_h) {
            (self.cell_w, self.cell_h)
        } else if fits(2, 1) {
            (2, 1)
        } else {
            (1, 1)
        };

        let frame_w = cols.saturating_mul(cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(cell_h).saturating_add(2);
        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
            cell_w,
            cell_h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x, y, w, h) = (layout.x, layout.y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(120, 120, 140), FLOOR_BG);

        fb.put_char(x, y, '╔', style);
        fb.put_char(x + w - 1, y, '╗', style);
        fb.put_char(x, y + h - 1, '╚', style);
        fb.put_char(x + w - 1, y + h - 1, '╝', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '═', style);
            fb.put_char(x + dx, y + h - 1, '═', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '║', style);
            fb.put_char(x + w - 1, y + dy, '║', style);
        }
    }

    fn draw_maze(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let wall = CellStyle::new(WALL_FG, FLOOR_BG);
        let floor = CellStyle::new(FLOOR_BG, FLOOR_BG);
        for gy in 0..snap.rows {
            for gx in 0..snap.cols {
                let (ch, style) = match snap.cell(gx, gy) {
                    Some(CellKind::Wall) => ('█', wall),
                    _ => (' ', floor),
                };
                fb.fill_rect(
                    layout.x + 1 + gx as u16 * layout.cell_w,
                    layout.y + 1 + gy as u16 * layout.cell_h,
                    layout.cell_w,
                    layout.cell_h,
                    ch,
                    style,
                );
            }
        }
    }

    fn draw_entity(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        entity: &EntitySnapshot,
    ) {
        let style = CellStyle::new(entity_color(entity.kind), FLOOR_BG).bold();
        let glyph = match entity.kind {
            EntityKind::Agent => '●',
            EntityKind::Pursuer(_) => 'Ω',
        };
        let (x, y) = to_screen(layout, snap.cell_size, entity.position);
        fb.put_char(x, y, glyph, style);
        if layout.cell_w >= 4 {
            // Wide cells: two columns so the entity reads as round.
            fb.put_char(x.saturating_sub(1), y, glyph, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), FLOOR_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), FLOOR_BG);

        let mut y = layout.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LIVES", snap.lives),
            ("PELLETS", snap.pellets.len() as u32),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        let hint = CellStyle::new(Rgb::new(130, 130, 130), FLOOR_BG);
        fb.put_str(panel_x, y, "move: arrows/wasd", hint);
        fb.put_str(panel_x, y.saturating_add(1), "quit: q", hint);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let y = layout.y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, CellStyle::new(Rgb::new(255, 255, 255), FLOOR_BG).bold());
    }
}

/// Terminal cell under a pixel position.
fn to_screen(layout: &Layout, cell_size: i32, p: Point) -> (u16, u16) {
    let cell_size = cell_size.max(1);
    let sx = (p.x.max(0) * layout.cell_w as i32) / cell_size;
    let sy = (p.y.max(0) * layout.cell_h as i32) / cell_size;
    (
        layout.x.saturating_add(1).saturating_add(sx as u16),
        layout.y.saturating_add(1).saturating_add(sy as u16),
    )
}

pub fn entity_color(kind: EntityKind) -> Rgb {
    match kind {
        EntityKind::Agent => Rgb::new(255, 255, 0),
        EntityKind::Pursuer(PursuerName::Blinky) => Rgb::new(255, 0, 0),
        EntityKind::Pursuer(PursuerName::Pinky) => Rgb::new(255, 180, 180),
        EntityKind::Pursuer(PursuerName::Inky) => Rgb::new(0, 255, 255),
        EntityKind::Pursuer(PursuerName::Clyde) => Rgb::new(255, 165, 0),
    }
}
