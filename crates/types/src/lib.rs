//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is a grid of `width x height` cells with `(0, 0)` in the top-left
//! corner; `x` grows to the right and `y` grows downward.
//!
//! - **Default size**: 20 x 20
//! - **Minimum width**: 1
//! - **Minimum height**: 5 (the reset snake is three cells tall, centred)
//!
//! # Game Timing
//!
//! The delay between ticks shrinks as the score grows:
//!
//! | Score | Interval |
//! |-------|----------|
//! | 0 | 250ms |
//! | 10 | 200ms |
//! | 60 | 100ms |
//! | 160 | 50ms |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Vector2, tick_interval_ms};
//!
//! let head = Vector2::new(2, 2);
//! assert_eq!(head + Direction::Up.unit(), Vector2::new(2, 1));
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(tick_interval_ms(0), 250);
//! ```

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Default board width in cells.
pub const DEFAULT_BOARD_WIDTH: u16 = 20;

/// Default board height in cells.
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Smallest board width the game can be played on.
pub const MIN_BOARD_WIDTH: u16 = 1;

/// Smallest board height that fits the centred reset snake.
pub const MIN_BOARD_HEIGHT: u16 = 5;

/// Body length after a reset.
pub const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Numerator of the tick interval formula, in milliseconds.
pub const TICK_BASE_MS: u32 = 10_000;

/// Score offset in the tick interval formula.
pub const TICK_SCORE_OFFSET: u32 = 40;

/// Milliseconds to wait before the next tick at the given score.
///
/// `10000 / (40 + score)`: the game speeds up as the snake eats.
pub fn tick_interval_ms(score: u32) -> u32 {
    TICK_BASE_MS / TICK_SCORE_OFFSET.saturating_add(score)
}

/// Integer 2D vector used for board positions and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self + -rhs
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        self * -1
    }
}

impl Mul<i32> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: i32) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

/// The four directions the snake can travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The reverse direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in this direction (`y` grows downward).
    pub fn unit(self) -> Vector2 {
        match self {
            Direction::Up => Vector2::new(0, -1),
            Direction::Down => Vector2::new(0, 1),
            Direction::Left => Vector2::new(-1, 0),
            Direction::Right => Vector2::new(1, 0),
        }
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        self.opposite()
    }
}

/// Eight-colour palette shared by the pixel field and the terminal.
///
/// The discriminant is the palette index used to build colour-pair indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// Number of palette entries.
    pub const COUNT: usize = 8;

    /// Every palette entry, in index order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Colour of an empty cell.
    pub const BACKGROUND: Color = Color::Black;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Input symbols consumed by the game tick.
///
/// Quit is handled by the outer loop and never reaches the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    /// Restart after death.
    Confirm,
}

impl GameInput {
    /// The direction this input steers towards, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameInput::Up => Some(Direction::Up),
            GameInput::Down => Some(Direction::Down),
            GameInput::Left => Some(Direction::Left),
            GameInput::Right => Some(Direction::Right),
            GameInput::Confirm => None,
        }
    }
}
