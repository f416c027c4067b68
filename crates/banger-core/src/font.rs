//! Font contract and the table-backed base implementation

use crate::error::{FontError, Result};
use crate::glyph::CharacterData;
use crate::metadata::FontMetadata;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Capabilities every font provides to the composition engine
pub trait Font: fmt::Debug + Send + Sync {
    fn metadata(&self) -> &FontMetadata;

    /// Glyph defined for exactly this character
    fn glyph(&self, ch: char) -> Option<&CharacterData>;

    /// Glyph substituted for characters the font does not define
    fn fallback(&self) -> Option<&CharacterData>;

    /// Characters with their own glyph. Never includes the fallback.
    fn available_characters(&self) -> BTreeSet<char>;

    fn name(&self) -> &str {
        &self.metadata().name
    }

    fn height(&self) -> usize {
        self.metadata().height
    }

    fn default_spacing(&self) -> usize {
        self.metadata().default_spacing
    }

    /// Resolve a character, falling back to the font's fallback glyph
    fn character(&self, ch: char) -> Result<&CharacterData> {
        self.glyph(ch)
            .or_else(|| self.fallback())
            .ok_or_else(|| FontError::CharacterNotFound {
                font: self.name().to_string(),
                ch,
            })
    }

    /// Whether the font defines its own glyph for `ch`
    fn has_character(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    /// Columns the glyph occupies once composed
    fn compute_character_width(&self, data: &CharacterData) -> usize {
        data.column_span().width
    }
}

/// Font backed by an immutable character table
#[derive(Debug, Clone)]
pub struct BaseFont {
    metadata: FontMetadata,
    glyphs: HashMap<char, CharacterData>,
    fallback: Option<CharacterData>,
}

impl BaseFont {
    /// Build a font, validating every glyph against the metadata.
    pub fn new<I>(
        metadata: FontMetadata,
        glyphs: I,
        fallback: Option<CharacterData>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (char, CharacterData)>,
    {
        metadata.validate()?;

        let mut table = HashMap::new();
        for (ch, data) in glyphs {
            data.validate(metadata.height, metadata.is_zero_width(ch))
                .map_err(|source| FontError::InvalidGlyph {
                    font: metadata.name.clone(),
                    glyph: format!("{ch:?}"),
                    source,
                })?;
            table.insert(ch, data);
        }

        if let Some(data) = &fallback {
            data.validate(metadata.height, false)
                .map_err(|source| FontError::InvalidGlyph {
                    font: metadata.name.clone(),
                    glyph: "fallback".to_string(),
                    source,
                })?;
        }

        tracing::debug!(
            "Loaded font '{}' ({} glyphs, height {}, fallback: {})",
            metadata.name,
            table.len(),
            metadata.height,
            fallback.is_some()
        );

        Ok(Self {
            metadata,
            glyphs: table,
            fallback,
        })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Font for BaseFont {
    fn metadata(&self) -> &FontMetadata {
        &self.metadata
    }

    fn glyph(&self, ch: char) -> Option<&CharacterData> {
        self.glyphs.get(&ch)
    }

    fn fallback(&self) -> Option<&CharacterData> {
        self.fallback.as_ref()
    }

    fn available_characters(&self) -> BTreeSet<char> {
        self.glyphs.keys().copied().collect()
    }
}
