//! Named catalog entries

use crate::color::Rgb;

/// A named reference color in the catalog.
///
/// The display name is free text and not guaranteed unique. The color is
/// stored canonically as [`Rgb`]; the hex and `rgb(...)` text forms are
/// derived on demand so they are always the canonical rendering,
/// whatever casing or spacing the catalog source used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: String,
    rgb: Rgb,
}

impl CatalogEntry {
    /// Create an entry from a display name and its color.
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color value.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Textual `rgb(r, g, b)` form.
    pub fn rgb_literal(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }
}
