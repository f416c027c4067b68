//! Classic `#` banner font
//!
//! ```text
//!  ###  ####
//! #   # #   #
//! ##### ####
//! ```

use super::bitmap::{self, BITMAP_HEIGHT, BOX};
use crate::error::{FontError, GlyphError, Result};
use crate::font::BaseFont;
use crate::glyph::CharacterData;
use crate::metadata::{FontMetadata, DEFAULT_CHAR_SPACING};

pub const NAME: &str = "default";

const SPACE_WIDTH: usize = 4;
const ZERO_WIDTH_SPACE: char = '\u{200B}';

pub fn metadata() -> FontMetadata {
    FontMetadata::new(NAME, BITMAP_HEIGHT)
        .with_description("Classic banner letters drawn with '#'")
        .with_default_spacing(DEFAULT_CHAR_SPACING)
        .with_zero_width([ZERO_WIDTH_SPACE])
}

pub fn create() -> Result<BaseFont> {
    let invalid = |glyph: String| {
        move |source: GlyphError| FontError::InvalidGlyph {
            font: NAME.to_string(),
            glyph,
            source,
        }
    };

    let mut glyphs = Vec::new();
    for (ch, rows) in bitmap::glyphs() {
        let data = CharacterData::from_rows(rows.iter().copied(), true)
            .map_err(invalid(format!("{ch:?}")))?;
        glyphs.push((ch, data));
    }

    let space = CharacterData::blank(BITMAP_HEIGHT, SPACE_WIDTH).map_err(invalid("' '".into()))?;
    glyphs.push((' ', space));

    let zwsp = CharacterData::new(vec![""; BITMAP_HEIGHT], 0, false)
        .map_err(invalid(format!("{ZERO_WIDTH_SPACE:?}")))?;
    glyphs.push((ZERO_WIDTH_SPACE, zwsp));

    let fallback =
        CharacterData::from_rows(BOX.iter().copied(), true).map_err(invalid("fallback".into()))?;

    BaseFont::new(metadata(), glyphs, Some(fallback))
}
