//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the score line, the message line, then the board
//! inside a box border. Each board row in the terminal carries two pixel rows.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer};
use crate::half_block::{encode_row, output_rows};
use crate::palette::ColorPairTable;
use crate::pixel_field::PixelField;
use crate::types::{Color, Vector2};

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

/// Lines of text above the board frame.
const HEADER_LINES: u16 = 2;

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    anchor_y: AnchorY,
    field: PixelField,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            field: PixelField::new(Vector2::default()),
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// The pixel field built by the last render.
    pub fn field(&self) -> &PixelField {
        &self.field
    }

    /// Terminal size needed to show a board of `board_size` cells.
    pub fn required_size(board_size: Vector2) -> (u16, u16) {
        let w = (board_size.x.max(0) as u16).saturating_add(2);
        let h = (output_rows(board_size.y) as u16)
            .saturating_add(2)
            .saturating_add(HEADER_LINES);
        (w, h)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &mut self,
        game: &GameState,
        pairs: &ColorPairTable,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        self.field.draw_game(game);

        let board = game.board_size();
        let board_w = board.x as u16;
        let board_rows = output_rows(board.y) as u16;
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_rows.saturating_add(2);
        let block_h = frame_h.saturating_add(HEADER_LINES);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };

        let label = CellStyle::default().bold();
        let text = CellStyle::default();

        let x = fb.put_str(start_x, start_y, "Score: ", label);
        fb.put_u32(x, start_y, game.score(), text);
        fb.put_str(start_x, start_y.saturating_add(1), game.message(), text);

        let frame_y = start_y.saturating_add(HEADER_LINES);
        let border = CellStyle::new(Color::White, Color::BACKGROUND);
        self.draw_border(fb, start_x, frame_y, frame_w, frame_h, border);

        let origin_x = start_x.saturating_add(1);
        for row in 0..board_rows {
            let y = frame_y.saturating_add(1 + row);
            if y >= fb.height() {
                break;
            }
            for (col, cell) in encode_row(&self.field, row as i32).enumerate() {
                let x = origin_x.saturating_add(col as u16);
                if x >= fb.width() {
                    break;
                }
                fb.set(x, y, pairs.resolve(cell));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &mut self,
        game: &GameState,
        pairs: &ColorPairTable,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, pairs, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        // Only the part inside the framebuffer can show.
        let visible_w = w.min(fb.width().saturating_sub(x));
        let visible_h = h.min(fb.height().saturating_sub(y));
        for dx in 1..visible_w.min(w - 1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..visible_h.min(h - 1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
    }
}
