//! Banner composition
//!
//! Turns a string and a font into rows of text. Every output has exactly
//! `font.height()` rows, including the output for an empty string.
//!
//! ```text
//!  ###       ####     <- 'A', spacing, ' ' (4 columns, untrimmed), spacing, 'B'
//! #   #      #   #
//! ```

use crate::error::{FontError, Result};
use crate::font::Font;
use crate::glyph::{CharacterData, ColumnSpan, BLANK};
use serde::{Deserialize, Serialize};

/// What to do with a character the font cannot draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingCharPolicy {
    /// Leave the character out of the banner
    #[default]
    Skip,
    /// Fail with `CharacterNotFound`
    Strict,
}

/// Per-render options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BannerOptions {
    /// Columns between glyphs; the font's default when `None`
    pub spacing: Option<usize>,
    pub missing: MissingCharPolicy,
}

impl BannerOptions {
    pub fn with_spacing(mut self, spacing: Option<usize>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_missing(mut self, missing: MissingCharPolicy) -> Self {
        self.missing = missing;
        self
    }
}

/// A resolved glyph and the columns it contributes
#[derive(Debug, Clone, Copy)]
struct Placed<'f> {
    glyph: &'f CharacterData,
    span: ColumnSpan,
}

/// Composes glyphs into banner rows
#[derive(Debug, Clone, Default)]
pub struct BannerGenerator {
    options: BannerOptions,
}

impl BannerGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BannerOptions {
        &self.options
    }

    /// Render `text` into exactly `font.height()` rows.
    ///
    /// Only consecutive glyphs that occupy at least one column are separated,
    /// so the rows never start or end with separator columns. Zero-width
    /// glyphs and skipped characters leave no trace in the output.
    pub fn render(&self, text: &str, font: &dyn Font) -> Result<Vec<String>> {
        let placed = self.resolve(text, font)?;
        let separator = BLANK.to_string().repeat(self.spacing(font));

        let mut lines = vec![String::new(); font.height()];
        for (row, line) in lines.iter_mut().enumerate() {
            for (index, item) in placed.iter().enumerate() {
                if index > 0 {
                    line.push_str(&separator);
                }

                let cells = item.glyph.row(row).unwrap_or_default();
                let before = line.len();
                line.extend(cells.chars().skip(item.span.start).take(item.span.width));
                let taken = line[before..].chars().count();
                line.extend(std::iter::repeat(BLANK).take(item.span.width - taken));
            }
        }

        Ok(lines)
    }

    /// Render and join the rows with newlines
    pub fn render_to_string(&self, text: &str, font: &dyn Font) -> Result<String> {
        Ok(self.render(text, font)?.join("\n"))
    }

    /// Width in columns of the rendered banner
    pub fn measure(&self, text: &str, font: &dyn Font) -> Result<usize> {
        let placed = self.resolve(text, font)?;
        let glyphs: usize = placed.iter().map(|p| p.span.width).sum();
        let gaps = placed.len().saturating_sub(1);
        Ok(glyphs + gaps * self.spacing(font))
    }

    fn spacing(&self, font: &dyn Font) -> usize {
        self.options.spacing.unwrap_or_else(|| font.default_spacing())
    }

    /// Look up every character once, applying the missing-character policy
    fn resolve<'f>(&self, text: &str, font: &'f dyn Font) -> Result<Vec<Placed<'f>>> {
        let mut placed = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let glyph = match font.character(ch) {
                Ok(glyph) => glyph,
                Err(FontError::CharacterNotFound { .. })
                    if self.options.missing == MissingCharPolicy::Skip =>
                {
                    tracing::trace!("Skipping {:?}, not in font '{}'", ch, font.name());
                    continue;
                }
                Err(e) => return Err(e),
            };

            let span = ColumnSpan {
                start: glyph.column_span().start,
                width: font.compute_character_width(glyph),
            };
            if !span.is_empty() {
                placed.push(Placed { glyph, span });
            }
        }
        Ok(placed)
    }
}
