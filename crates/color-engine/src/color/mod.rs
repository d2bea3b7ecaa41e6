//! Color types and conversion utilities
//!
//! The codec at the bottom of the engine: every other module works in
//! terms of these types.
//!
//! - [`Rgb`]: canonical 8-bit storage form. Parses from hex strings
//!   (`FromStr`) and `rgb(r,g,b)` literals, formats as lowercase
//!   `#rrggbb`.
//! - [`Hsv`]: derived cylindrical view used for hue arithmetic. Lossy on
//!   the way back to `Rgb` (truncating), by design.
//!
//! # Example
//!
//! ```
//! use color_engine::{Hsv, Rgb};
//!
//! let base: Rgb = "#3366cc".parse().unwrap();
//! let complement = Hsv::from(base).rotate_hue(0.5).to_rgb();
//! assert_ne!(complement, base);
//! ```

mod error;
mod hsv;
mod rgb;

pub use error::ParseColorError;
pub use hsv::Hsv;
pub use rgb::Rgb;
