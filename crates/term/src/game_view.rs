//! GameView: maps a core [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameStatus, Snapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Color, BLOCK_SIZE};

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Where the field frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal renderer for the game field.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // BLOCK_SIZE columns per cell compensates for tall terminal glyphs.
        Self {
            cell_w: BLOCK_SIZE,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Paint the whole frame: border, every field cell, side panel and overlay.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let layout = self.layout(snap, viewport);
        self.draw_border(fb, layout);

        for y in 0..usize::from(snap.height()) {
            for x in 0..usize::from(snap.width()) {
                let color = snap.get(x, y).unwrap_or_default();
                self.draw_cell(fb, layout, x as u16, y as u16, color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.status {
            GameStatus::Idle => self.draw_overlay(fb, layout, "PRESS ENTER"),
            GameStatus::GameOver => self.draw_overlay(fb, layout, "GAME OVER"),
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Repaint only the field cells whose color changed since `prev`.
    ///
    /// `fb` must hold the frame rendered from `prev`. A change in status or
    /// field size falls back to a full [`GameView::render_into`]. Returns the
    /// number of field cells repainted.
    pub fn paint_changes(
        &self,
        prev: &Snapshot,
        snap: &Snapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> usize {
        let same_frame = prev.status == snap.status
            && prev.width() == snap.width()
            && prev.height() == snap.height()
            && fb.width() == viewport.width
            && fb.height() == viewport.height;
        if !same_frame {
            self.render_into(snap, viewport, fb);
            return snap.cells().len();
        }

        let layout = self.layout(snap, viewport);
        let mut painted = 0;
        for square in snap.changed_cells(prev) {
            let (x, y) = square.cord();
            self.draw_cell(fb, layout, x as u16, y as u16, square.color());
            painted += 1;
        }
        painted
    }

    fn layout(&self, snap: &Snapshot, viewport: Viewport) -> Layout {
        let w = u16::from(snap.width()) * self.cell_w + 2;
        let h = u16::from(snap.height()) * self.cell_h + 2;
        Layout {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, at: Layout) {
        let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let right = at.x + at.w - 1;
        let bottom = at.y + at.h - 1;

        fb.set(at.x, at.y, Glyph::new('┌', style));
        fb.set(right, at.y, Glyph::new('┐', style));
        fb.set(at.x, bottom, Glyph::new('└', style));
        fb.set(right, bottom, Glyph::new('┘', style));
        for x in at.x + 1..right {
            fb.set(x, at.y, Glyph::new('─', style));
            fb.set(x, bottom, Glyph::new('─', style));
        }
        for y in at.y + 1..bottom {
            fb.set(at.x, y, Glyph::new('│', style));
            fb.set(right, y, Glyph::new('│', style));
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, at: Layout, x: u16, y: u16, color: Color) {
        let glyph = match color_rgb(color) {
            Some(fg) => Glyph::new('█', Style::new(fg, BOARD_BG).bold()),
            None => Glyph::new('·', Style::new(Rgb::new(90, 90, 100), BOARD_BG)),
        };
        let px = at.x + 1 + x * self.cell_w;
        let py = at.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &Snapshot, viewport: Viewport, at: Layout) {
        let panel_x = at.x.saturating_add(at.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(170, 170, 170), Rgb::new(0, 0, 0));

        let mut y = at.y;
        fb.put_str(panel_x, y, "BLOCKS", label);
        y += 2;

        fb.put_str(panel_x, y, "STATUS", label);
        y += 1;
        let status = match snap.status {
            GameStatus::Idle => "ready",
            GameStatus::Running => "running",
            GameStatus::GameOver => "game over",
        };
        fb.put_str(panel_x, y, status, value);
        y += 2;

        fb.put_str(panel_x, y, "KEYS", label);
        for line in ["←/→  move", "↓    drop", "↑    turn", "⏎    start", "q    quit"] {
            y += 1;
            fb.put_str(panel_x, y, line, value);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, at: Layout, text: &str) {
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(at.x, at.w, at.y.saturating_add(at.h / 2), text, style);
    }
}

/// Display color for a field color, `None` for empty cells.
pub fn color_rgb(color: Color) -> Option<Rgb> {
    match color {
        Color::Empty => None,
        Color::Red => Some(Rgb::new(220, 80, 80)),
        Color::Blue => Some(Rgb::new(80, 120, 220)),
        Color::Green => Some(Rgb::new(100, 220, 120)),
        Color::Orange => Some(Rgb::new(255, 165, 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Block, Field};
    use crate::types::ShapeKind;

    #[test]
    fn layout_centers_the_frame() {
        let view = GameView::default();
        let snap = Snapshot::compose(&Field::default(), None, GameStatus::Idle);
        let layout = view.layout(&snap, Viewport::new(80, 24));
        assert_eq!(layout, Layout { x: 29, y: 1, w: 22, h: 22 });
    }

    #[test]
    fn occupied_cells_draw_as_blocks() {
        let view = GameView::new(2, 1);
        let field = Field::new(4, 4);
        let block = Block::new(ShapeKind::O, 4);
        let snap = Snapshot::compose(&field, Some(&block), GameStatus::Running);

        let fb = view.render(&snap, Viewport::new(10, 6));

        // Frame is 10x6 at the origin; O covers field columns 1-2 on rows 0-1.
        assert_eq!(fb.row_text(1), "│··████··│");
        assert_eq!(fb.row_text(3), "│········│");
    }
}
