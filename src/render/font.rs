//! Built-in 5x7 bitmap font, used for raster text when no outline font loads.
//!
//! Glyph rows are stored top to bottom; bit 4 is the leftmost column.
//! Characters without a glyph render as a hollow box.

use crate::geometry::Rect;
use crate::render::style::Font;

/// Glyph width in font units.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font units.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character in font units (glyph plus one gap).
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

const MISSING: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// Look up the rows of `ch`.
#[must_use]
pub fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        ' ' => [0, 0, 0, 0, 0, 0, 0],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        'a' => [0, 0, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
        'c' => [0, 0, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0, 0, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'g' => [0, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'j' => [0b00010, 0, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0, 0, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        'n' => [0, 0, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0, 0, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0, 0, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'q' => [0, 0, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001],
        'r' => [0, 0, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0, 0, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'u' => [0, 0, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'v' => [0, 0, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0, 0, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
        'x' => [0, 0, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0, 0, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'z' => [0, 0, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '+' => [0, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0],
        '=' => [0, 0, 0b11111, 0, 0b11111, 0, 0],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => [0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => return None,
    };
    Some(rows)
}

/// Rows for `ch`, falling back to a hollow box.
#[must_use]
pub fn glyph_or_box(ch: char) -> [u8; 7] {
    glyph(ch).unwrap_or(MISSING)
}

/// Pixel size of one font unit for `font`.
#[must_use]
pub fn pixel_scale(font: &Font) -> u32 {
    ((font.size / GLYPH_HEIGHT as f32).round() as u32).max(1)
}

/// Baseline-relative bounds of `text` rendered with the bitmap font.
#[must_use]
pub fn bitmap_bounds(text: &str, font: &Font) -> Rect {
    let scale = f64::from(pixel_scale(font));
    let chars = text.chars().count() as f64;
    let width = if chars == 0.0 {
        0.0
    } else {
        (chars * f64::from(GLYPH_ADVANCE) - 1.0) * scale
    };
    let height = f64::from(GLYPH_HEIGHT) * scale;
    Rect::new(0.0, -height, width, height)
}

/// Baseline-relative bounds estimated from the font size alone.
///
/// Used by surfaces that cannot measure glyphs (vector output, recording).
#[must_use]
pub fn estimated_bounds(text: &str, font: &Font) -> Rect {
    let size = f64::from(font.size);
    let advance = if font.bold { 0.6 } else { 0.55 };
    let width = text.chars().count() as f64 * size * advance;
    Rect::new(0.0, -size * 0.8, width, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_labels_have_glyphs() {
        for ch in ['0', 'x', 'y'] {
            assert!(glyph(ch).is_some(), "missing glyph for {ch}");
        }
    }

    #[test]
    fn test_glyph_rows_fit_width() {
        for ch in (' '..='~').filter_map(glyph) {
            assert!(ch.iter().all(|row| *row < (1 << GLYPH_WIDTH)));
        }
    }

    #[test]
    fn test_missing_glyph_is_box() {
        assert_eq!(glyph('Ж'), None);
        assert_eq!(glyph_or_box('Ж'), MISSING);
    }

    #[test]
    fn test_pixel_scale() {
        assert_eq!(pixel_scale(&Font::bold_serif(36.0)), 5);
        assert_eq!(pixel_scale(&Font::bold_serif(24.0)), 3);
        assert_eq!(pixel_scale(&Font::bold_serif(2.0)), 1);
    }

    #[test]
    fn test_bitmap_bounds() {
        let bounds = bitmap_bounds("0", &Font::bold_serif(36.0));
        assert_eq!(bounds.width, 25.0);
        assert_eq!(bounds.height, 35.0);
        assert_eq!(bounds.y, -35.0);

        let two = bitmap_bounds("xy", &Font::bold_serif(7.0));
        assert_eq!(two.width, 11.0);
    }

    #[test]
    fn test_empty_text_bounds() {
        assert_eq!(bitmap_bounds("", &Font::bold_serif(14.0)).width, 0.0);
        assert_eq!(estimated_bounds("", &Font::bold_serif(14.0)).width, 0.0);
    }
}
