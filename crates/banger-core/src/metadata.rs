//! Font metadata

use crate::error::{FontError, Result};
use serde::{Deserialize, Serialize};

/// Columns inserted between adjacent glyphs unless a font or caller says otherwise
pub const DEFAULT_CHAR_SPACING: usize = 1;

/// Descriptive record for a font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetadata {
    /// Unique name used for lookup
    pub name: String,
    /// Short human-readable description for help output
    #[serde(default)]
    pub description: String,
    /// Number of rows every glyph has
    pub height: usize,
    /// Columns between adjacent glyphs
    #[serde(default = "default_spacing")]
    pub default_spacing: usize,
    /// Characters allowed to have a zero-width glyph
    #[serde(default)]
    pub zero_width: Vec<char>,
}

fn default_spacing() -> usize {
    DEFAULT_CHAR_SPACING
}

impl FontMetadata {
    pub fn new(name: impl Into<String>, height: usize) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            height,
            default_spacing: DEFAULT_CHAR_SPACING,
            zero_width: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default_spacing(mut self, spacing: usize) -> Self {
        self.default_spacing = spacing;
        self
    }

    /// Declare characters whose glyphs may be zero columns wide
    pub fn with_zero_width(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.zero_width.extend(chars);
        self
    }

    pub fn is_zero_width(&self, ch: char) -> bool {
        self.zero_width.contains(&ch)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FontError::InvalidMetadata {
                font: self.name.clone(),
                reason: "font name is empty".to_string(),
            });
        }
        if self.height == 0 {
            return Err(FontError::InvalidMetadata {
                font: self.name.clone(),
                reason: "font height must be positive".to_string(),
            });
        }
        Ok(())
    }
}
