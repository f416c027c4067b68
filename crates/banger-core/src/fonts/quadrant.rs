//! Compact font drawn with Unicode quadrant blocks
//!
//! Each cell packs a 2x2 block of the shared bitmap into one of the sixteen
//! quadrant characters, halving both the height and the width.
//!
//! ```text
//! ▞▀▖ ▛▀▖
//! ▙▄▌ ▙▄▘
//! ▌ ▌ ▌ ▌
//! ▘ ▘ ▀▀
//! ```

use super::bitmap::{self, Bitmap, BITMAP_HEIGHT};
use crate::error::{FontError, Result};
use crate::font::BaseFont;
use crate::glyph::CharacterData;
use crate::metadata::{FontMetadata, DEFAULT_CHAR_SPACING};

pub const NAME: &str = "quadrant";

pub const HEIGHT: usize = BITMAP_HEIGHT.div_ceil(2);

const SPACE_WIDTH: usize = 2;

/// Indexed by `tl | tr << 1 | bl << 2 | br << 3`
const QUADRANTS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];

pub fn metadata() -> FontMetadata {
    FontMetadata::new(NAME, HEIGHT)
        .with_description("Half-size letters built from quadrant block characters")
        .with_default_spacing(DEFAULT_CHAR_SPACING)
}

pub fn create() -> Result<BaseFont> {
    let mut glyphs = Vec::new();
    for (ch, rows) in bitmap::glyphs() {
        let data = CharacterData::from_rows(pack(rows), true).map_err(|source| {
            FontError::InvalidGlyph {
                font: NAME.to_string(),
                glyph: format!("{ch:?}"),
                source,
            }
        })?;
        glyphs.push((ch, data));
    }

    let space =
        CharacterData::blank(HEIGHT, SPACE_WIDTH).map_err(|source| FontError::InvalidGlyph {
            font: NAME.to_string(),
            glyph: "' '".to_string(),
            source,
        })?;
    glyphs.push((' ', space));

    // No fallback: characters outside the table are left out of the banner
    BaseFont::new(metadata(), glyphs, None)
}

/// Pack a bitmap into quadrant rows, dropping unlit edge columns first
fn pack(bitmap: &Bitmap) -> Vec<String> {
    let lit = |row: usize, col: usize| -> bool {
        bitmap
            .get(row)
            .and_then(|r| r.as_bytes().get(col))
            .is_some_and(|&b| b == b'#')
    };

    let cols = bitmap.iter().map(|r| r.len()).max().unwrap_or(0);
    let lit_cols: Vec<usize> = (0..cols)
        .filter(|&c| (0..BITMAP_HEIGHT).any(|r| lit(r, c)))
        .collect();
    let (first, last) = match (lit_cols.first(), lit_cols.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return vec![String::new(); HEIGHT],
    };

    (0..HEIGHT)
        .map(|cell_row| {
            let top = cell_row * 2;
            (first..=last)
                .step_by(2)
                .map(|left| {
                    let index = usize::from(lit(top, left))
                        | usize::from(left < last && lit(top, left + 1)) << 1
                        | usize::from(lit(top + 1, left)) << 2
                        | usize::from(left < last && lit(top + 1, left + 1)) << 3;
                    QUADRANTS[index]
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quadrant_height() {
        let font = create().unwrap();
        assert_eq!(font.height(), 4);
    }

    #[test]
    fn test_letter_a() {
        let font = create().unwrap();
        assert_eq!(font.character('A').unwrap().lines(), ["▞▀▖", "▙▄▌", "▌ ▌", "▘ ▘"]);
    }

    #[test]
    fn test_narrow_glyph_is_tightened() {
        // '!' only lights the middle pixel column
        let font = create().unwrap();
        let bang = font.character('!').unwrap();
        assert_eq!(bang.width(), 1);
        assert_eq!(bang.lines(), ["▌", "▌", "▘", "▘"]);
    }

    #[test]
    fn test_reference_extra_characters() {
        let font = create().unwrap();
        let available = font.available_characters();
        for ch in " !#$()*+-./:?[]_".chars() {
            assert!(available.contains(&ch), "missing {ch:?}");
        }
    }

    #[test]
    fn test_no_fallback() {
        let font = create().unwrap();
        assert!(font.fallback().is_none());
        assert!(font.character('~').is_err());
    }
}
