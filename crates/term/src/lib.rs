//! Half-block terminal rendering for the snake board.
//!
//! Frames are composed in a [`FrameBuffer`] and flushed through crossterm.
//!
//! The pipeline per frame:
//!
//! 1. [`PixelField`]: one palette colour per board cell, rebuilt from the game state
//! 2. [`half_block`]: two pixel rows packed into one terminal row (glyph + colour pair)
//! 3. [`ColorPairTable`]: colour pair index resolved to a cell style
//! 4. [`GameView`]: header text, border and board laid out into a [`FrameBuffer`]
//! 5. [`TerminalRenderer`]: diffs against the previous frame and writes escape codes
//!
//! Steps 1-4 are pure and unit-tested; only step 5 performs I/O.

pub mod fb;
pub mod game_view;
pub mod half_block;
pub mod palette;
pub mod pixel_field;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use half_block::{ColorPair, Glyph, HalfBlockCell, HalfBlockGrid};
pub use palette::{ColorPairTable, PaletteError, REQUIRED_COLORS};
pub use pixel_field::{PixelField, DEAD_SNAKE_COLOR, FRUIT_COLOR, SNAKE_COLOR};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
