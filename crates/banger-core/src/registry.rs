//! Font registry
//!
//! Maps font names to constructors. Fonts are built on first use and the
//! instance is shared afterwards, so every lookup after the first is a map
//! access plus an `Arc` clone.

use crate::error::{FontError, Result};
use crate::font::{BaseFont, Font};
use crate::fonts;
use once_cell::sync::{Lazy, OnceCell};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Builds a font from its static glyph table
pub type FontConstructor = fn() -> Result<BaseFont>;

struct FontEntry {
    constructor: FontConstructor,
    instance: OnceCell<Arc<dyn Font>>,
}

/// Name to font mapping
#[derive(Default)]
pub struct FontRegistry {
    entries: BTreeMap<String, FontEntry>,
}

impl FontRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every compiled-in font.
    ///
    /// Built-in names must be unique; a repeated name panics in debug builds.
    pub fn with_builtin_fonts() -> Self {
        let mut registry = Self::new();
        for (name, constructor) in fonts::builtin() {
            let added = registry.register(name, constructor);
            debug_assert!(added.is_ok(), "built-in font '{name}' is registered twice");
            if let Err(e) = added {
                tracing::error!("Skipping built-in font: {}", e);
            }
        }
        registry
    }

    /// Add a font under `name`
    pub fn register(&mut self, name: impl Into<String>, constructor: FontConstructor) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(FontError::DuplicateFont { name });
        }

        tracing::trace!("Registered font '{}'", name);
        self.entries.insert(
            name,
            FontEntry {
                constructor,
                instance: OnceCell::new(),
            },
        );
        Ok(())
    }

    /// Get the font registered under `name`, building it on first use.
    ///
    /// A font whose glyph data fails validation is reported on every call and
    /// never cached.
    pub fn create(&self, name: &str) -> Result<Arc<dyn Font>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| FontError::UnknownFont {
                name: name.to_string(),
            })?;

        let font = entry.instance.get_or_try_init(|| {
            let font = (entry.constructor)()?;
            if font.name() != name {
                return Err(FontError::InvalidMetadata {
                    font: name.to_string(),
                    reason: format!("constructor built a font named '{}'", font.name()),
                });
            }
            Ok(Arc::new(font) as Arc<dyn Font>)
        })?;

        Ok(Arc::clone(font))
    }

    /// Registered font names in sorted order
    pub fn list_available(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("fonts", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

static REGISTRY: Lazy<FontRegistry> = Lazy::new(FontRegistry::with_builtin_fonts);

/// Process-wide registry of the built-in fonts
pub fn registry() -> &'static FontRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::CharacterData;
    use crate::metadata::FontMetadata;

    fn dots() -> Result<BaseFont> {
        let dot = CharacterData::from_rows([".", "."], true).map_err(|source| {
            FontError::InvalidGlyph {
                font: "dots".to_string(),
                glyph: "'.'".to_string(),
                source,
            }
        })?;
        BaseFont::new(FontMetadata::new("dots", 2), [('.', dot)], None)
    }

    fn broken() -> Result<BaseFont> {
        BaseFont::new(FontMetadata::new("broken", 0), [], None)
    }

    #[test]
    fn test_builtin_fonts_are_registered() {
        let registry = FontRegistry::with_builtin_fonts();
        assert_eq!(registry.list_available(), vec!["block", "default", "quadrant"]);
        assert!(registry.contains("quadrant"));
        assert!(!registry.contains("Quadrant"));
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = FontRegistry::new();
        assert!(registry.is_empty());
        registry.register("dots", dots).unwrap();
        let font = registry.create("dots").unwrap();
        assert_eq!(font.height(), 2);
    }

    #[test]
    fn test_duplicate_font() {
        let mut registry = FontRegistry::new();
        registry.register("dots", dots).unwrap();
        assert_eq!(
            registry.register("dots", dots).unwrap_err(),
            FontError::DuplicateFont {
                name: "dots".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_font() {
        let registry = FontRegistry::with_builtin_fonts();
        assert_eq!(
            registry.create("does-not-exist").unwrap_err(),
            FontError::UnknownFont {
                name: "does-not-exist".to_string()
            }
        );
    }

    #[test]
    fn test_instances_are_shared() {
        let registry = FontRegistry::with_builtin_fonts();
        let a = registry.create("default").unwrap();
        let b = registry.create("default").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_invalid_font_fails_on_create() {
        let mut registry = FontRegistry::new();
        registry.register("broken", broken).unwrap();
        assert!(matches!(
            registry.create("broken"),
            Err(FontError::InvalidMetadata { .. })
        ));
        // Still failing, nothing was cached
        assert!(registry.create("broken").is_err());
    }

    #[test]
    fn test_name_mismatch_is_rejected() {
        let mut registry = FontRegistry::new();
        registry.register("not-dots", dots).unwrap();
        assert!(matches!(
            registry.create("not-dots"),
            Err(FontError::InvalidMetadata { .. })
        ));
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let names: Vec<&str> = fonts::builtin().iter().map(|(name, _)| *name).collect();
        let registry = FontRegistry::with_builtin_fonts();
        assert_eq!(registry.len(), names.len());
        for name in names {
            assert!(registry.contains(name));
        }
    }

    #[test]
    fn test_global_registry() {
        assert!(registry().contains(fonts::DEFAULT_FONT));
    }
}
