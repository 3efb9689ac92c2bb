//! Colour-pair table: the 64 (top, bottom) combinations the board can show.
//!
//! The table is built once at startup from the terminal's reported colour
//! capability and then used to turn encoded half-block cells into styled
//! framebuffer cells.

use derive_more::{Display, Error};
use tracing::debug;

use crate::fb::{Cell, CellStyle};
use crate::half_block::{ColorPair, Glyph, HalfBlockCell};
use crate::types::Color;

/// Colours the terminal must support to draw the palette.
pub const REQUIRED_COLORS: u16 = Color::COUNT as u16;

/// Failure to set up the colour palette on the output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PaletteError {
    /// The terminal reports fewer colours than the palette needs.
    #[display("not enough colors available: terminal supports {available}, need {required}")]
    InsufficientColors { available: u16, required: u16 },
}

/// Fixed lookup from [`ColorPair`] index to cell style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPairTable {
    styles: [CellStyle; ColorPair::COUNT],
}

impl ColorPairTable {
    /// Build the table for a terminal that supports `available_colors` colours.
    pub fn register(available_colors: u16) -> Result<Self, PaletteError> {
        if available_colors < REQUIRED_COLORS {
            return Err(PaletteError::InsufficientColors {
                available: available_colors,
                required: REQUIRED_COLORS,
            });
        }

        let mut styles = [CellStyle::default(); ColorPair::COUNT];
        for top in Color::ALL {
            for bottom in Color::ALL {
                styles[ColorPair::new(top, bottom).index()] = CellStyle::new(top, bottom);
            }
        }
        debug!(available_colors, pairs = ColorPair::COUNT, "color pairs registered");
        Ok(Self { styles })
    }

    /// Style for a pair: foreground = top colour, background = bottom colour.
    pub fn style(&self, pair: ColorPair) -> CellStyle {
        self.styles[pair.index()]
    }

    /// Turn an encoded cell into a framebuffer cell.
    ///
    /// The lower-half glyph paints its foreground below, so the pair's colours
    /// are swapped for it.
    pub fn resolve(&self, cell: HalfBlockCell) -> Cell {
        let style = self.style(cell.pair);
        match cell.glyph {
            Glyph::Lower => style.swapped().into_cell(Glyph::Lower.as_char()),
            glyph => style.into_cell(glyph.as_char()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_monochrome_terminals() {
        let err = ColorPairTable::register(2).unwrap_err();
        assert_eq!(
            err,
            PaletteError::InsufficientColors {
                available: 2,
                required: 8
            }
        );
        assert!(err.to_string().contains("not enough colors"));
    }

    #[test]
    fn register_builds_all_pairs() {
        let table = ColorPairTable::register(256).unwrap();
        for top in Color::ALL {
            for bottom in Color::ALL {
                let style = table.style(ColorPair::new(top, bottom));
                assert_eq!((style.fg, style.bg), (top, bottom));
            }
        }
    }

    #[test]
    fn resolve_paints_each_half_in_its_colour() {
        let table = ColorPairTable::register(8).unwrap();

        let upper = table.resolve(HalfBlockCell::encode(Color::White, Color::Black));
        assert_eq!(upper.ch, '▀');
        assert_eq!((upper.style.fg, upper.style.bg), (Color::White, Color::Black));

        let lower = table.resolve(HalfBlockCell::encode(Color::Black, Color::Yellow));
        assert_eq!(lower.ch, '▄');
        assert_eq!((lower.style.fg, lower.style.bg), (Color::Yellow, Color::Black));

        let empty = table.resolve(HalfBlockCell::encode(Color::Black, Color::Black));
        assert_eq!(empty.ch, ' ');
        assert_eq!(empty.style.bg, Color::Black);
    }
}
