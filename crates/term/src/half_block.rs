//! Half-block encoding: two pixel rows per terminal row.
//!
//! Terminal cells are roughly twice as tall as they are wide, so each output
//! cell carries a top and a bottom pixel. The glyph says which halves are
//! filled; the colour pair carries the (top, bottom) colours.
//!
//! | top | bottom | glyph |
//! |-----|--------|-------|
//! | bg | bg | [`Glyph::Empty`] |
//! | set | bg | [`Glyph::Upper`] |
//! | bg | set | [`Glyph::Lower`] |
//! | c | c | [`Glyph::Full`] |
//! | c1 | c2 | [`Glyph::Upper`] (foreground on top, background below) |
//!
//! A field with an odd height gets a background bottom half on its last row.

use crate::pixel_field::PixelField;
use crate::types::Color;

/// Glyph vocabulary for one output cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Empty,
    Upper,
    Lower,
    Full,
}

impl Glyph {
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Empty => ' ',
            Glyph::Upper => '▀',
            Glyph::Lower => '▄',
            Glyph::Full => '█',
        }
    }
}

/// Index of an ordered (top, bottom) colour pair: `top * 8 + bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair(u8);

impl ColorPair {
    /// Number of distinct ordered pairs.
    pub const COUNT: usize = Color::COUNT * Color::COUNT;

    pub const fn new(top: Color, bottom: Color) -> Self {
        Self(top as u8 * Color::COUNT as u8 + bottom as u8)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index as u8))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn top(self) -> Color {
        Color::ALL[self.index() / Color::COUNT]
    }

    pub fn bottom(self) -> Color {
        Color::ALL[self.index() % Color::COUNT]
    }
}

/// One encoded output cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfBlockCell {
    pub glyph: Glyph,
    pub pair: ColorPair,
}

impl HalfBlockCell {
    /// Encode a top and a bottom pixel.
    pub fn encode(top: Color, bottom: Color) -> Self {
        let bg = Color::BACKGROUND;
        let glyph = match (top != bg, bottom != bg) {
            (false, false) => Glyph::Empty,
            (true, false) => Glyph::Upper,
            (false, true) => Glyph::Lower,
            (true, true) if top == bottom => Glyph::Full,
            (true, true) => Glyph::Upper,
        };
        Self {
            glyph,
            pair: ColorPair::new(top, bottom),
        }
    }
}

/// Number of output rows needed for `field_height` pixel rows.
pub fn output_rows(field_height: i32) -> i32 {
    (field_height.max(0) + 1) / 2
}

/// Encode output row `row` (pixel rows `2 * row` and `2 * row + 1`).
pub fn encode_row(field: &PixelField, row: i32) -> impl Iterator<Item = HalfBlockCell> + '_ {
    let top_y = row * 2;
    (0..field.size().x).map(move |x| {
        HalfBlockCell::encode(
            field.get_or_background(x, top_y),
            field.get_or_background(x, top_y + 1),
        )
    })
}

/// A fully encoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfBlockGrid {
    width: i32,
    height: i32,
    cells: Vec<HalfBlockCell>,
}

impl HalfBlockGrid {
    pub fn encode(field: &PixelField) -> Self {
        let width = field.size().x;
        let height = output_rows(field.size().y);
        let cells = (0..height).flat_map(|row| encode_row(field, row)).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<HalfBlockCell> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    pub fn row(&self, y: i32) -> &[HalfBlockCell] {
        if y < 0 || y >= self.height {
            return &[];
        }
        let start = (y * self.width) as usize;
        &self.cells[start..start + self.width as usize]
    }
}
