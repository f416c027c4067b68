//! Built-in fonts
//!
//! Each font module exposes a `NAME`, its `metadata()` and a `create()`
//! constructor that builds and validates the glyph table.

mod bitmap;

pub mod block;
pub mod default;
pub mod quadrant;

use crate::registry::FontConstructor;

/// Font used when no font is requested
pub const DEFAULT_FONT: &str = quadrant::NAME;

/// Every compiled-in font with its constructor
pub fn builtin() -> [(&'static str, FontConstructor); 3] {
    [
        (default::NAME, default::create),
        (quadrant::NAME, quadrant::create),
        (block::NAME, block::create),
    ]
}
