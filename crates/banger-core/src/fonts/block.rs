//! Block font (big bold letters)

use crate::error::{FontError, Result};
use crate::font::BaseFont;
use crate::glyph::CharacterData;
use crate::metadata::{FontMetadata, DEFAULT_CHAR_SPACING};

pub const NAME: &str = "block";

pub const HEIGHT: usize = 5;

const SPACE_WIDTH: usize = 3;

const FALLBACK: [&str; HEIGHT] = ["█████", "█   █", "█   █", "█   █", "█████"];

#[rustfmt::skip]
const GLYPHS: &[(char, [&str; HEIGHT])] = &[
    ('A', ["█████", "█   █", "█████", "█   █", "█   █"]),
    ('B', ["████ ", "█   █", "████ ", "█   █", "████ "]),
    ('C', ["█████", "█    ", "█    ", "█    ", "█████"]),
    ('D', ["████ ", "█   █", "█   █", "█   █", "████ "]),
    ('E', ["█████", "█    ", "███  ", "█    ", "█████"]),
    ('F', ["█████", "█    ", "███  ", "█    ", "█    "]),
    ('G', ["█████", "█    ", "█ ███", "█   █", "█████"]),
    ('H', ["█   █", "█   █", "█████", "█   █", "█   █"]),
    ('I', ["█████", "  █  ", "  █  ", "  █  ", "█████"]),
    ('J', ["█████", "    █", "    █", "█   █", "█████"]),
    ('K', ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"]),
    ('L', ["█    ", "█    ", "█    ", "█    ", "█████"]),
    ('M', ["█   █", "██ ██", "█ █ █", "█   █", "█   █"]),
    ('N', ["█   █", "██  █", "█ █ █", "█  ██", "█   █"]),
    ('O', ["█████", "█   █", "█   █", "█   █", "█████"]),
    ('P', ["█████", "█   █", "█████", "█    ", "█    "]),
    ('Q', ["█████", "█   █", "█   █", "█  █ ", "███ █"]),
    ('R', ["█████", "█   █", "████ ", "█  █ ", "█   █"]),
    ('S', ["█████", "█    ", "█████", "    █", "█████"]),
    ('T', ["█████", "  █  ", "  █  ", "  █  ", "  █  "]),
    ('U', ["█   █", "█   █", "█   █", "█   █", "█████"]),
    ('V', ["█   █", "█   █", "█   █", " █ █ ", "  █  "]),
    ('W', ["█   █", "█   █", "█ █ █", "██ ██", "█   █"]),
    ('X', ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"]),
    ('Y', ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "]),
    ('Z', ["█████", "   █ ", "  █  ", " █   ", "█████"]),
    ('0', ["█████", "█  ██", "█ █ █", "██  █", "█████"]),
    ('1', [" ██  ", "  █  ", "  █  ", "  █  ", "█████"]),
    ('2', ["█████", "    █", "█████", "█    ", "█████"]),
    ('3', ["█████", "    █", " ████", "    █", "█████"]),
    ('4', ["█   █", "█   █", "█████", "    █", "    █"]),
    ('5', ["█████", "█    ", "█████", "    █", "█████"]),
    ('6', ["█████", "█    ", "█████", "█   █", "█████"]),
    ('7', ["█████", "    █", "   █ ", "  █  ", "  █  "]),
    ('8', ["█████", "█   █", "█████", "█   █", "█████"]),
    ('9', ["█████", "█   █", "█████", "    █", "█████"]),
    ('!', ["  █  ", "  █  ", "  █  ", "     ", "  █  "]),
    ('?', ["█████", "    █", "  ██ ", "     ", "  █  "]),
    ('.', ["     ", "     ", "     ", "     ", "  █  "]),
    ('-', ["     ", "     ", "█████", "     ", "     "]),
    (':', ["     ", "  █  ", "     ", "  █  ", "     "]),
];

pub fn metadata() -> FontMetadata {
    FontMetadata::new(NAME, HEIGHT)
        .with_description("Solid block letters")
        .with_default_spacing(DEFAULT_CHAR_SPACING)
}

pub fn create() -> Result<BaseFont> {
    let glyph = |key: String, rows: &[&str]| {
        CharacterData::from_rows(rows.iter().copied(), true).map_err(|source| {
            FontError::InvalidGlyph {
                font: NAME.to_string(),
                glyph: key,
                source,
            }
        })
    };

    let mut glyphs = Vec::with_capacity(GLYPHS.len() * 2 + 1);
    for (ch, rows) in GLYPHS {
        let data = glyph(format!("{ch:?}"), &rows[..])?;
        let lower = ch.to_ascii_lowercase();
        if lower != *ch {
            glyphs.push((lower, data.clone()));
        }
        glyphs.push((*ch, data));
    }
    let space =
        CharacterData::blank(HEIGHT, SPACE_WIDTH).map_err(|source| FontError::InvalidGlyph {
            font: NAME.to_string(),
            glyph: "' '".to_string(),
            source,
        })?;
    glyphs.push((' ', space));

    let fallback = glyph("fallback".into(), &FALLBACK[..])?;
    BaseFont::new(metadata(), glyphs, Some(fallback))
}
