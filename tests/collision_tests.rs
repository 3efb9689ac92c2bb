//! Collision tests - board bounds and self-intersection on encoded bodies

use tui_snake::core::{
    point_collides_with_snake, point_inside_area, point_on_line, snake_collided, BodyChain, Line,
    Segment,
};
use tui_snake::types::{Direction, Vector2};

#[test]
fn test_point_on_line_is_half_open() {
    let line = Line::new(Vector2::new(0, 0), Direction::Right, 3);
    assert!(point_on_line(Vector2::new(0, 0), line));
    assert!(point_on_line(Vector2::new(2, 0), line));
    assert!(!point_on_line(Vector2::new(3, 0), line));
    assert!(!point_on_line(Vector2::new(-1, 0), line));
}

#[test]
fn test_fruit_check_includes_head() {
    let body = BodyChain::new(Vector2::new(2, 2), Direction::Up, 3);
    assert!(point_collides_with_snake(Vector2::new(2, 2), &body, true));
    assert!(point_collides_with_snake(Vector2::new(2, 4), &body, true));
    assert!(!point_collides_with_snake(Vector2::new(2, 5), &body, true));
    assert!(!point_collides_with_snake(Vector2::new(2, 1), &body, true));
}

#[test]
fn test_head_is_not_its_own_collision() {
    let body = BodyChain::from_segments(
        Vector2::new(4, 1),
        [
            Segment::new(Direction::Right, 2),
            Segment::new(Direction::Up, 3),
        ],
    );
    assert!(!snake_collided(&body, Vector2::new(10, 10)));
}

#[test]
fn test_one_cell_wide_board_kills_on_sideways_move() {
    let board = Vector2::new(1, 5);
    let mut body = BodyChain::new(Vector2::new(0, 2), Direction::Up, 3);
    assert!(!snake_collided(&body, board));

    body.move_head(Direction::Right);
    body.shrink_tail();

    assert!(!point_inside_area(body.head(), board));
    assert!(!point_collides_with_snake(body.head(), &body, false));
    assert!(snake_collided(&body, board));
}

#[test]
fn test_running_into_own_body() {
    // Travel up, right, down, then left back into the first run.
    let mut body = BodyChain::new(Vector2::new(5, 5), Direction::Up, 5);
    for d in [Direction::Right, Direction::Down] {
        body.move_head(d);
        body.shrink_tail();
        assert!(!snake_collided(&body, Vector2::new(10, 10)));
    }

    body.move_head(Direction::Left);
    body.shrink_tail();
    assert_eq!(body.head(), Vector2::new(5, 6));
    assert!(snake_collided(&body, Vector2::new(10, 10)));
}

#[test]
fn test_following_the_tail_is_safe() {
    // A 4-cell snake filling a 2x2 square: (0,0) (0,1) (1,1) (1,0).
    let mut body = BodyChain::from_segments(
        Vector2::new(0, 0),
        [
            Segment::new(Direction::Up, 1),
            Segment::new(Direction::Left, 1),
            Segment::new(Direction::Down, 2),
        ],
    );
    assert_eq!(
        body.cells().collect::<Vec<_>>(),
        vec![
            Vector2::new(0, 0),
            Vector2::new(0, 1),
            Vector2::new(1, 1),
            Vector2::new(1, 0)
        ]
    );
    assert_eq!(body.len(), 4);
    for d in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
        body.move_head(d);
        body.shrink_tail();
        assert!(!snake_collided(&body, Vector2::new(2, 2)), "{d:?}");
    }
}
