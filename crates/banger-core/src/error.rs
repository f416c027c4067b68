//! Error types for banger core

use thiserror::Error;

/// Result type for font and banner operations
pub type Result<T> = std::result::Result<T, FontError>;

/// Font registry, loading and lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// Requested font is not registered
    #[error("Unknown font: '{name}'")]
    UnknownFont { name: String },

    /// A font with this name is already registered
    #[error("Font '{name}' is already registered")]
    DuplicateFont { name: String },

    /// Static glyph data violates the font invariants
    #[error("Invalid glyph {glyph} in font '{font}': {source}")]
    InvalidGlyph {
        font: String,
        glyph: String,
        #[source]
        source: GlyphError,
    },

    /// Font metadata is unusable
    #[error("Invalid metadata for font '{font}': {reason}")]
    InvalidMetadata { font: String, reason: String },

    /// Character is absent and the font has no fallback glyph
    #[error("Character {ch:?} not found in font '{font}'")]
    CharacterNotFound { font: String, ch: char },
}

/// Structural problems with a single glyph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// Glyph has no rows at all
    #[error("glyph has no rows")]
    EmptyLines,

    /// Row count differs from the font height
    #[error("glyph has {actual} rows, expected {expected}")]
    HeightMismatch { expected: usize, actual: usize },

    /// Width is zero and the character is not declared zero-width
    #[error("glyph width is zero")]
    ZeroWidth,

    /// A row occupies more columns than the declared width
    #[error("row {row} is {row_width} columns wide, declared width is {width}")]
    RowTooWide {
        row: usize,
        row_width: usize,
        width: usize,
    },

    /// A cell does not occupy exactly one display column
    #[error("row {row} contains {cell:?} which is not a single-column cell")]
    WideCell { row: usize, cell: char },
}
