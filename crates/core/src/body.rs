//! Body module - run-length encoded snake body
//!
//! The body is stored as a head position plus a list of straight runs
//! (segments), ordered from the head towards the tail. A snake that travels in
//! long straight lines costs one segment per turn rather than one entry per cell.
//!
//! Each segment records the direction the head was travelling while it laid the
//! run down. The head is the first cell of the first run; walking backwards from
//! the head against each segment's direction visits every occupied cell once.

use std::collections::VecDeque;

use crate::types::{Direction, Vector2};

/// A straight run of body cells laid down while travelling in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub direction: Direction,
    pub length: i32,
}

impl Segment {
    pub const fn new(direction: Direction, length: i32) -> Self {
        Self { direction, length }
    }
}

/// Snake body: head position plus head-to-tail segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BodyChain {
    head: Vector2,
    segments: VecDeque<Segment>,
}

impl BodyChain {
    /// Create a straight body of `length` cells whose head is at `head`,
    /// travelling in `direction`.
    pub fn new(head: Vector2, direction: Direction, length: i32) -> Self {
        let mut segments = VecDeque::with_capacity(8);
        segments.push_back(Segment::new(direction, length));
        Self { head, segments }
    }

    /// Build a body from explicit segments (head-to-tail order).
    pub fn from_segments(head: Vector2, segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            head,
            segments: segments.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Vector2 {
        self.head
    }

    pub fn segments(&self) -> &VecDeque<Segment> {
        &self.segments
    }

    /// Current heading (direction of the first segment).
    ///
    /// Returns `None` only for an emptied chain, which a live game never holds.
    pub fn heading(&self) -> Option<Direction> {
        self.segments.front().map(|s| s.direction)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.length.max(0) as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance the head one cell in `direction`, growing the body by one.
    ///
    /// Travelling straight extends the first segment. Turning prepends a new
    /// zero-length segment which is then grown like any other.
    pub fn move_head(&mut self, direction: Direction) {
        if self.heading() != Some(direction) {
            self.segments.push_front(Segment::new(direction, 0));
        }

        self.head += direction.unit();
        if let Some(front) = self.segments.front_mut() {
            front.length += 1;
        }
    }

    /// Remove the last body cell, dropping the tail segment once it is empty.
    ///
    /// # Panics
    ///
    /// Panics if the chain has no segments left.
    pub fn shrink_tail(&mut self) {
        let Some(tail) = self.segments.back_mut() else {
            panic!("shrink_tail called on an empty body");
        };

        tail.length -= 1;
        if tail.length <= 0 {
            self.segments.pop_back();
        }
    }

    /// Iterate the occupied cells from head to tail.
    pub fn cells(&self) -> BodyCells<'_> {
        BodyCells {
            segments: self.segments.iter(),
            cursor: self.head,
            step: Vector2::default(),
            remaining: 0,
        }
    }
}

/// Iterator over the cells of a [`BodyChain`], head first.
pub struct BodyCells<'a> {
    segments: std::collections::vec_deque::Iter<'a, Segment>,
    cursor: Vector2,
    step: Vector2,
    remaining: i32,
}

impl Iterator for BodyCells<'_> {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        while self.remaining <= 0 {
            let segment = self.segments.next()?;
            self.step = segment.direction.opposite().unit();
            self.remaining = segment.length;
        }

        let cell = self.cursor;
        self.cursor += self.step;
        self.remaining -= 1;
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_is_straight() {
        let body = BodyChain::new(Vector2::new(2, 2), Direction::Up, 3);
        assert_eq!(body.len(), 3);
        assert_eq!(body.heading(), Some(Direction::Up));

        let cells: Vec<_> = body.cells().collect();
        assert_eq!(
            cells,
            vec![Vector2::new(2, 2), Vector2::new(2, 3), Vector2::new(2, 4)]
        );
    }

    #[test]
    fn test_move_straight_extends_front_segment() {
        let mut body = BodyChain::new(Vector2::new(2, 2), Direction::Up, 3);
        body.move_head(Direction::Up);

        assert_eq!(body.head(), Vector2::new(2, 1));
        assert_eq!(body.segments().len(), 1);
        assert_eq!(body.segments()[0], Segment::new(Direction::Up, 4));
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn test_turn_prepends_unit_segment() {
        let mut body = BodyChain::new(Vector2::new(5, 5), Direction::Up, 4);
        body.move_head(Direction::Right);

        assert_eq!(body.head(), Vector2::new(6, 5));
        assert_eq!(
            body.segments().iter().copied().collect::<Vec<_>>(),
            vec![
                Segment::new(Direction::Right, 1),
                Segment::new(Direction::Up, 4)
            ]
        );
        assert_eq!(body.heading(), Some(Direction::Right));
    }

    #[test]
    fn test_shrink_tail_removes_empty_segment() {
        let mut body = BodyChain::from_segments(
            Vector2::new(6, 5),
            [
                Segment::new(Direction::Right, 2),
                Segment::new(Direction::Up, 1),
            ],
        );
        body.shrink_tail();
        assert_eq!(body.segments().len(), 1);
        assert_eq!(body.len(), 2);

        body.shrink_tail();
        assert_eq!(body.segments()[0], Segment::new(Direction::Right, 1));
    }

    #[test]
    fn test_shrink_last_cell_empties_chain() {
        let mut body = BodyChain::new(Vector2::new(0, 0), Direction::Up, 1);
        body.shrink_tail();
        assert!(body.segments().is_empty());
        assert!(body.is_empty());
        assert_eq!(body.heading(), None);
        assert_eq!(body.cells().count(), 0);
    }

    #[test]
    #[should_panic(expected = "empty body")]
    fn test_shrink_empty_chain_panics() {
        let mut body = BodyChain::from_segments(Vector2::new(0, 0), []);
        body.shrink_tail();
    }

    #[test]
    fn test_cells_follow_turns() {
        // Head at (4,1) after travelling up from (3,3) then right.
        let body = BodyChain::from_segments(
            Vector2::new(4, 1),
            [
                Segment::new(Direction::Right, 1),
                Segment::new(Direction::Up, 2),
            ],
        );
        let cells: Vec<_> = body.cells().collect();
        assert_eq!(
            cells,
            vec![Vector2::new(4, 1), Vector2::new(3, 1), Vector2::new(3, 2)]
        );
    }

    #[test]
    fn test_move_then_shrink_keeps_length() {
        let mut body = BodyChain::new(Vector2::new(5, 5), Direction::Up, 3);
        for d in [Direction::Left, Direction::Left, Direction::Down, Direction::Down] {
            body.move_head(d);
            body.shrink_tail();
            assert_eq!(body.len(), 3);
            assert_eq!(body.cells().count(), 3);
        }
    }
}
