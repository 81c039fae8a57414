//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Game;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Phase;

/// Settled piece material
pub const SETTLED_COLOR: Rgb = Rgb::new(255, 255, 0);
/// The falling piece
pub const PIECE_COLOR: Rgb = Rgb::new(255, 0, 0);

const PLAY_AREA_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Renders the game field, score and overlays into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid = game.grid();
        let board_px_w = (grid.width() as u16) * self.cell_w;
        let board_px_h = (grid.height() as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Field: settled cells and the empty-cell texture.
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if grid.get(x, y) == Some(true) {
                    self.draw_block(&mut fb, start_x, start_y, x, y, SETTLED_COLOR);
                } else {
                    self.draw_empty(&mut fb, start_x, start_y, x, y);
                }
            }
        }

        // Falling piece, clipped to the field.
        let piece = game.piece();
        for (sx, sy) in piece.shape.occupied_cells() {
            let x = piece.x + sx as i32;
            let y = piece.y + sy as i32;
            if x >= 0 && x < grid.width() as i32 && y >= 0 && y < grid.height() as i32 {
                self.draw_block(&mut fb, start_x, start_y, x, y, PIECE_COLOR);
            }
        }

        self.draw_score_panel(&mut fb, game, viewport, start_x, start_y, frame_w);

        if game.phase() == Phase::GameOver {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i32, y: i32) {
        let style = CellStyle {
            fg: Rgb::new(80, 80, 80),
            bg: PLAY_AREA_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i32,
        y: i32,
        color: Rgb,
    ) {
        let style = CellStyle {
            fg: color,
            bg: PLAY_AREA_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + (cell_x as u16) * self.cell_w;
        let py = start_y + 1 + (cell_y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_score_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.put_str(panel_x, start_y, "SCORE", label);
        fb.put_str(
            panel_x,
            start_y.saturating_add(1),
            &format!("{}", game.score()),
            value,
        );
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let hint = CellStyle {
            bold: false,
            dim: true,
            ..style
        };

        let mid_y = start_y.saturating_add(h / 2);
        self.put_centered(fb, start_x, w, mid_y, "GAME OVER", style);
        self.put_centered(fb, start_x, w, mid_y.saturating_add(1), "PRESS ENTER", hint);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
