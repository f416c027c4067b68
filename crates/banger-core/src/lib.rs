//! # Bänger Core
//!
//! Because your `banner` deserves to be a `bänger`!
//!
//! This crate provides:
//! - The glyph and font metadata model
//! - Compiled-in fonts (`default`, `quadrant`, `block`)
//! - A font registry with lookup and discovery
//! - The banner composition engine
//!
//! ```text
//! ▛▀▖▞▀▖▙ ▌▞▀▖▛▀▘▛▀▖
//! ▙▄▘▙▄▌▌▚▌▌▄▖▙▄ ▙▄▘
//! ▌ ▌▌ ▌▌ ▌▌ ▌▌  ▌▚
//! ▀▀ ▘ ▘▘ ▘▝▀ ▀▀▘▘ ▘
//! ```

pub mod banner;
pub mod error;
pub mod font;
pub mod fonts;
pub mod glyph;
pub mod metadata;
pub mod registry;

pub use banner::{BannerGenerator, BannerOptions, MissingCharPolicy};
pub use error::{FontError, GlyphError, Result};
pub use font::{BaseFont, Font};
pub use fonts::DEFAULT_FONT;
pub use glyph::{CharacterData, ColumnSpan};
pub use metadata::{FontMetadata, DEFAULT_CHAR_SPACING};
pub use registry::{registry, FontConstructor, FontRegistry};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render `text` with a registered font.
///
/// Characters the font cannot draw are skipped. Fails only when the font is
/// unknown or its glyph data is invalid.
pub fn render_banner(text: &str, font_name: &str, spacing: Option<usize>) -> Result<Vec<String>> {
    let font = registry().create(font_name)?;
    BannerGenerator::with_options(BannerOptions::default().with_spacing(spacing))
        .render(text, font.as_ref())
}

/// Names of all registered fonts, sorted
pub fn list_fonts() -> Vec<String> {
    registry().list_available()
}

/// Row count of a registered font
pub fn font_height(font_name: &str) -> Result<usize> {
    Ok(registry().create(font_name)?.height())
}

/// Whether a registered font has its own glyph for `ch`
pub fn font_has_character(font_name: &str, ch: char) -> Result<bool> {
    Ok(registry().create(font_name)?.has_character(ch))
}

/// Metadata of a registered font
pub fn font_info(font_name: &str) -> Result<FontMetadata> {
    Ok(registry().create(font_name)?.metadata().clone())
}
