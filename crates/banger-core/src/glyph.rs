//! Glyph data model
//!
//! A glyph is a fixed-height stack of rows. Every cell of a row occupies exactly
//! one display column, so a row's length in `char`s is its width in columns.
//! Rows shorter than the glyph width are treated as right-padded with blanks.
//!
//! ```text
//!  ###      trim = true   -> blank edge columns are dropped when composing
//! #   #     trim = false  -> declared width is kept verbatim (spaces)
//! #####
//! ```

use crate::error::GlyphError;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The blank cell used for padding and separators
pub const BLANK: char = ' ';

/// Window of columns a glyph contributes to a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSpan {
    /// First column taken from each row
    pub start: usize,
    /// Number of columns taken
    pub width: usize,
}

impl ColumnSpan {
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }
}

/// One glyph of a font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterData {
    lines: Vec<String>,
    width: usize,
    trim: bool,
}

impl CharacterData {
    /// Create a glyph with an explicit width.
    ///
    /// Fails when there are no rows, when a row holds a cell that is not exactly
    /// one column wide, or when a row is wider than `width`. A zero `width` is
    /// accepted here; whether it is allowed depends on the owning font and is
    /// checked by [`CharacterData::validate`].
    pub fn new<I, S>(lines: I, width: usize, trim: bool) -> Result<Self, GlyphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(GlyphError::EmptyLines);
        }

        for (row, line) in lines.iter().enumerate() {
            if let Some(cell) = line.chars().find(|c| c.width() != Some(1)) {
                return Err(GlyphError::WideCell { row, cell });
            }
            let row_width = line.width();
            if row_width > width {
                return Err(GlyphError::RowTooWide {
                    row,
                    row_width,
                    width,
                });
            }
        }

        Ok(Self { lines, width, trim })
    }

    /// Create a glyph whose width is its widest row
    pub fn from_rows<I, S>(lines: I, trim: bool) -> Result<Self, GlyphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        Self::new(lines, width, trim)
    }

    /// Untrimmed all-blank glyph, the usual shape of a space
    pub fn blank(height: usize, width: usize) -> Result<Self, GlyphError> {
        Self::new(vec![BLANK.to_string().repeat(width); height], width, false)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Declared width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn trim(&self) -> bool {
        self.trim
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// True when no row has a lit cell
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.chars().all(|c| c == BLANK))
    }

    /// Check this glyph against the owning font's height.
    ///
    /// `zero_width_exempt` is set for characters the font declares as
    /// zero-width in its metadata.
    pub fn validate(&self, height: usize, zero_width_exempt: bool) -> Result<(), GlyphError> {
        if self.lines.len() != height {
            return Err(GlyphError::HeightMismatch {
                expected: height,
                actual: self.lines.len(),
            });
        }
        if self.width == 0 && !zero_width_exempt {
            return Err(GlyphError::ZeroWidth);
        }
        Ok(())
    }

    /// Columns this glyph contributes when composed.
    ///
    /// Untrimmed glyphs keep `0..width`. Trimmed glyphs drop the columns that
    /// are blank in every row from both edges; a fully blank trimmed glyph
    /// collapses to an empty span.
    pub fn column_span(&self) -> ColumnSpan {
        if !self.trim {
            return ColumnSpan {
                start: 0,
                width: self.width,
            };
        }

        let mut first: Option<usize> = None;
        let mut last = 0;
        for line in &self.lines {
            for (col, cell) in line.chars().enumerate() {
                if cell != BLANK {
                    first = Some(first.map_or(col, |f| f.min(col)));
                    last = last.max(col);
                }
            }
        }

        match first {
            Some(start) => ColumnSpan {
                start,
                width: last - start + 1,
            },
            None => ColumnSpan::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_lines() {
        let err = CharacterData::new(Vec::<String>::new(), 3, true).unwrap_err();
        assert_eq!(err, GlyphError::EmptyLines);
    }

    #[test]
    fn test_rejects_rows_wider_than_width() {
        let err = CharacterData::new(["###", "#####"], 3, true).unwrap_err();
        assert_eq!(
            err,
            GlyphError::RowTooWide {
                row: 1,
                row_width: 5,
                width: 3
            }
        );
    }

    #[test]
    fn test_rejects_wide_cells() {
        let err = CharacterData::from_rows(["ab", "漢"], true).unwrap_err();
        assert_eq!(err, GlyphError::WideCell { row: 1, cell: '漢' });

        let err = CharacterData::from_rows(["e\u{301}"], true).unwrap_err();
        assert_eq!(err, GlyphError::WideCell { row: 0, cell: '\u{301}' });
    }

    #[test]
    fn test_block_elements_are_single_column() {
        let glyph = CharacterData::from_rows(["▛▀▜", "▙▄▟"], true).unwrap();
        assert_eq!(glyph.width(), 3);
    }

    #[test]
    fn test_empty_rows_are_allowed() {
        let glyph = CharacterData::new(["", "#", ""], 1, true).unwrap();
        assert_eq!(glyph.height(), 3);
        assert_eq!(glyph.row(0), Some(""));
        assert_eq!(glyph.row(3), None);
    }

    #[test]
    fn test_validate_height_and_zero_width() {
        let glyph = CharacterData::from_rows(["#", "#"], true).unwrap();
        assert!(glyph.validate(2, false).is_ok());
        assert_eq!(
            glyph.validate(3, false).unwrap_err(),
            GlyphError::HeightMismatch {
                expected: 3,
                actual: 2
            }
        );

        let zero = CharacterData::new(["", ""], 0, false).unwrap();
        assert_eq!(zero.validate(2, false).unwrap_err(), GlyphError::ZeroWidth);
        assert!(zero.validate(2, true).is_ok());
    }

    #[test]
    fn test_trimmed_span_drops_blank_edges() {
        let glyph = CharacterData::from_rows(["  #  ", " ##  ", "  #  "], true).unwrap();
        assert_eq!(glyph.width(), 5);
        assert_eq!(glyph.column_span(), ColumnSpan { start: 1, width: 2 });
    }

    #[test]
    fn test_trimmed_span_keeps_inner_blank_columns() {
        let glyph = CharacterData::from_rows(["# #", "# #"], true).unwrap();
        assert_eq!(glyph.column_span(), ColumnSpan { start: 0, width: 3 });
    }

    #[test]
    fn test_untrimmed_span_is_declared_width() {
        let space = CharacterData::blank(3, 4).unwrap();
        assert!(space.is_blank());
        assert!(!space.trim());
        assert_eq!(space.column_span(), ColumnSpan { start: 0, width: 4 });
    }

    #[test]
    fn test_fully_blank_trimmed_glyph_is_empty() {
        let glyph = CharacterData::from_rows(["   ", "   "], true).unwrap();
        assert!(glyph.column_span().is_empty());
    }
}
