//! Collision module - geometric tests against the board and the snake body
//!
//! All tests work directly on the run-length encoded body: every segment is
//! checked as an axis-aligned line instead of expanding the body into cells.

use crate::body::{BodyChain, Segment};
use crate::types::{Direction, Vector2};

/// An axis-aligned run of `length` cells starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Vector2,
    pub direction: Direction,
    pub length: i32,
}

impl Line {
    pub const fn new(start: Vector2, direction: Direction, length: i32) -> Self {
        Self {
            start,
            direction,
            length,
        }
    }

    /// The cells a body segment covers when walked tail-ward from `start`.
    pub fn from_segment(start: Vector2, segment: Segment) -> Self {
        Self::new(start, segment.direction.opposite(), segment.length)
    }

    /// First cell past the end of the line.
    pub fn end(&self) -> Vector2 {
        self.start + self.direction.unit() * self.length
    }
}

/// Whether `point` lies on the half-open run `[start, start + length)`.
pub fn point_on_line(point: Vector2, line: Line) -> bool {
    let diff = point - line.start;
    let (across, along) = match line.direction {
        Direction::Up => (diff.x, -diff.y),
        Direction::Down => (diff.x, diff.y),
        Direction::Left => (diff.y, -diff.x),
        Direction::Right => (diff.y, diff.x),
    };
    across == 0 && along >= 0 && along < line.length
}

/// Whether `point` lies inside the half-open area `[0, size.x) x [0, size.y)`.
pub fn point_inside_area(point: Vector2, size: Vector2) -> bool {
    point.x >= 0 && point.x < size.x && point.y >= 0 && point.y < size.y
}

/// Whether `point` lies on any occupied cell of `body`.
///
/// With `include_head_segment == false` the first segment is skipped, which is
/// how the head is tested against the rest of the body.
pub fn point_collides_with_snake(
    point: Vector2,
    body: &BodyChain,
    include_head_segment: bool,
) -> bool {
    let mut start = body.head();
    for (i, segment) in body.segments().iter().enumerate() {
        let line = Line::from_segment(start, *segment);
        if (include_head_segment || i > 0) && point_on_line(point, line) {
            return true;
        }
        start = line.end();
    }
    false
}

/// Whether the head has left the board or run into the body.
pub fn snake_collided(body: &BodyChain, board_size: Vector2) -> bool {
    point_collides_with_snake(body.head(), body, false)
        || !point_inside_area(body.head(), board_size)
}
