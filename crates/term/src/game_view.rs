//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//! Only the visible rows are drawn; the hidden spawn rows never appear, and an
//! active piece that is still partly hidden is clipped at the top edge.

use crate::core::{shape_of, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceKind};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(10, 10, 20);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the playfield and HUD.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen placement of the board frame, computed once per frame.
#[derive(Debug, Clone, Copy)]
struct FrameRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_message(snap, None, viewport, fb);
    }

    /// Same as [`GameView::render_into`], plus a one-line message under the HUD.
    pub fn render_into_with_message(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).into_cell(' '));

        let board_px_w = (snap.width as u16) * self.cell_w;
        let board_px_h = (snap.visible_rows as u16) * self.cell_h;
        let frame = {
            let w = board_px_w + 2;
            let h = board_px_h + 2;
            let x = viewport.width.saturating_sub(w) / 2;
            let y = match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            };
            FrameRect { x, y, w, h }
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, frame, border);

        // Settled cells (visible rows only).
        for vy in 0..snap.visible_rows as u16 {
            for x in 0..snap.width as u16 {
                match PieceKind::from_cell_value(snap.visible_cell(x, vy)) {
                    Some(kind) => self.draw_block(fb, frame, x, vy, kind),
                    None => self.draw_empty_cell(fb, frame, x, vy),
                }
            }
        }

        // Active piece, clipped to the viewport.
        if let Some(active) = snap.active {
            let hidden = snap.hidden_rows as i32;
            for (dx, dy, kind) in active.shape.minos() {
                let x = active.x as i32 + dx as i32;
                let vy = active.y as i32 + dy as i32 - hidden;
                if x >= 0 && x < snap.width as i32 && vy >= 0 && vy < snap.visible_rows as i32 {
                    self.draw_block(fb, frame, x as u16, vy as u16, kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, message, viewport, frame);

        match snap.status {
            GameStatus::Paused => {
                self.draw_overlay_text(fb, frame, "PAUSED", Rgb::new(255, 255, 0))
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(fb, frame, "GAME OVER", Rgb::new(255, 0, 0))
            }
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect, style: CellStyle) {
        let FrameRect { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, vy: u16) {
        let style = CellStyle::new(Rgb::new(30, 30, 40), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame.x + 1, frame.y + 1, x, vy, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, vy: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame.x + 1, frame.y + 1, x, vy, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x.saturating_add(cell_x * self.cell_w);
        let py = origin_y.saturating_add(cell_y * self.cell_h);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
        frame: FrameRect,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("HI LEVEL", snap.high.high_level),
            ("HI LINES", snap.high.high_lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, v, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let preview = shape_of(snap.next);
        let style = CellStyle::new(piece_color(snap.next), PANEL_BG).bold();
        for (dx, dy, _) in preview.minos() {
            self.fill_cell_rect(fb, panel_x, y, dx as u16, dy as u16, '█', style);
        }
        y = y.saturating_add(preview.height() as u16 * self.cell_h + 1);

        if let Some(text) = message {
            fb.put_str(panel_x, y, text, value.dim());
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: FrameRect, text: &str, fg: Rgb) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::new(fg, PANEL_BG).bold());
    }
}

/// Block color per piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}
