//! Legible text color selection
//!
//! Given a background color, picks black or white for overlaid text.
//! Uses the classic ITU-R BT.601 luma weights -- good enough for a
//! legibility decision, and the one place the engine weights channels
//! perceptually at all.

use crate::color::Rgb;

/// Perceived brightness of a color, normalized to [0, 1].
///
/// `0.299*R + 0.587*G + 0.114*B` over channels scaled to [0, 1].
#[inline]
pub fn brightness(c: Rgb) -> f64 {
    (0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64) / 255.0
}

/// Pick a legible text color for the given background.
///
/// Black on light backgrounds (brightness above 0.5), white on dark
/// ones. Pure function, no state.
///
/// # Example
///
/// ```
/// use color_engine::{legible_text_color, Rgb};
///
/// assert_eq!(legible_text_color(Rgb::WHITE), Rgb::BLACK);
/// assert_eq!(legible_text_color(Rgb::BLACK), Rgb::WHITE);
/// ```
#[inline]
pub fn legible_text_color(bg: Rgb) -> Rgb {
    if brightness(bg) > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
