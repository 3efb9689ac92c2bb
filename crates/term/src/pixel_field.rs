//! PixelField: one palette colour per board cell.
//!
//! The field knows nothing about terminal geometry; it is rebuilt from the
//! game state every frame and then packed into half-block cells.

use crate::core::{BodyChain, GameState, Line};
use crate::types::{Color, Vector2};

/// Fruit colour.
pub const FRUIT_COLOR: Color = Color::Yellow;

/// Body colour while the snake is alive.
pub const SNAKE_COLOR: Color = Color::White;

/// Body colour after a crash.
pub const DEAD_SNAKE_COLOR: Color = Color::Red;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelField {
    size: Vector2,
    pixels: Vec<Color>,
}

impl PixelField {
    /// Create a field of `size` cells, all background.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(size: Vector2) -> Self {
        let size = Vector2::new(size.x.max(0), size.y.max(0));
        Self {
            size,
            pixels: vec![Color::BACKGROUND; (size.x as usize) * (size.y as usize)],
        }
    }

    pub fn size(&self) -> Vector2 {
        self.size
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        Some((y as usize) * (self.size.x as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Colour at `(x, y)`, or background outside the field.
    pub fn get_or_background(&self, x: i32, y: i32) -> Color {
        self.get(x, y).unwrap_or(Color::BACKGROUND)
    }

    /// Paint one cell. Points outside the field are ignored.
    pub fn set(&mut self, point: Vector2, color: Color) {
        if let Some(i) = self.idx(point.x, point.y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Paint every cell of `line`. Returns the first cell past its end.
    pub fn draw_line(&mut self, line: Line, color: Color) -> Vector2 {
        let step = line.direction.unit();
        let mut point = line.start;
        for _ in 0..line.length {
            self.set(point, color);
            point += step;
        }
        point
    }

    /// Paint every occupied cell of `body`, head included.
    pub fn draw_snake(&mut self, body: &BodyChain, color: Color) {
        let mut start = body.head();
        for segment in body.segments() {
            start = self.draw_line(Line::from_segment(start, *segment), color);
        }
    }

    /// Rebuild the field from scratch for the current game state.
    pub fn draw_game(&mut self, game: &GameState) {
        if self.size != game.board_size() {
            *self = Self::new(game.board_size());
        }

        self.clear(Color::BACKGROUND);
        self.set(game.fruit(), FRUIT_COLOR);
        let color = if game.alive() {
            SNAKE_COLOR
        } else {
            DEAD_SNAKE_COLOR
        };
        self.draw_snake(game.body(), color);
    }
}
