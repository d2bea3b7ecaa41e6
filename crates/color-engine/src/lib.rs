//! color-engine: pure color math for swatchdeck
//!
//! This library is the computation core behind the color explorer:
//! representation conversions, compositing, harmony palettes, and
//! similarity ranking over a named catalog. Every operation is a
//! deterministic, side-effect-free function over immutable values --
//! no global state, no I/O, safe to call from any thread without
//! synchronization.
//!
//! # Quick Start
//!
//! ```
//! use color_engine::{classify, generate, Catalog, CatalogEntry, HarmonyScheme, Query, Rgb};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new("Tomato", Rgb::new(255, 99, 71)),
//!     CatalogEntry::new("Teal", Rgb::new(0, 128, 128)),
//! ]);
//!
//! // Free text in, ranked swatches out
//! let query = classify("#ff6448").unwrap();
//! let hits = catalog.search(&query, 5);
//! assert_eq!(hits[0].name(), "Tomato");
//!
//! // A triadic palette from the best hit
//! let palette = generate(hits[0].rgb(), HarmonyScheme::Triadic, None);
//! assert_eq!(palette.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`Rgb`] / [`Hsv`]: the codec. `Rgb` (three 8-bit channels) is the
//!   canonical form; hex strings and HSV are derived views.
//! - [`composite`] / [`BlendMode`]: per-channel blend laws over two
//!   colors, integer math with truncating division.
//! - [`generate`] / [`HarmonyScheme`]: hue-rotation palettes from a base
//!   color.
//! - [`Catalog`] / [`CatalogEntry`]: the read-only named color set and
//!   its similarity ranking (plain Euclidean RGB distance, linear scan).
//! - [`classify`] / [`Query`]: routing of free search text to the right
//!   lookup.
//! - [`legible_text_color`]: black-or-white label choice for a swatch.
//!
//! # Errors
//!
//! The only fallible surface is string parsing: [`ParseColorError`] is
//! raised for malformed hex or `rgb(...)` literals and is always
//! recoverable by the caller. All numeric paths are total; out-of-range
//! arithmetic saturates to the displayable range instead of failing.

mod blend;
mod catalog;
mod color;
mod contrast;
mod harmony;
mod query;

mod domain_tests;

pub use blend::{composite, linear_mix, BlendMode};
pub use catalog::{distance, sort_entries, Catalog, CatalogEntry, SortKey};
pub use color::{Hsv, ParseColorError, Rgb};
pub use contrast::{brightness, legible_text_color};
pub use harmony::{generate, HarmonyScheme};
pub use query::{classify, Query};
