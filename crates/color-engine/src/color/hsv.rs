//! HSV color view
//!
//! `Hsv` is a derived view of an [`Rgb`] value, never the storage form.
//! All components live in 0..=1; hue is circular, taken modulo 1.0, so
//! 0.0 and 1.0 denote the same angle.
//!
//! The HSV -> RGB direction truncates float channels toward zero when
//! converting back to 8-bit integers. That makes the RGB -> HSV -> RGB
//! round trip lossy by up to one unit per channel, which is accepted:
//! the exactness guarantee belongs to the hex round trip only.

use super::rgb::Rgb;

/// A color in hue/saturation/value form.
///
/// # Example
///
/// ```
/// use color_engine::{Hsv, Rgb};
///
/// let red = Hsv::from(Rgb::new(255, 0, 0));
/// assert_eq!(red.h, 0.0);
/// assert_eq!(red.s, 1.0);
/// assert_eq!(red.v, 1.0);
///
/// let cyan = red.rotate_hue(0.5).to_rgb();
/// assert_eq!(cyan, Rgb::new(0, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of a turn (0.0..1.0, circular)
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Value (0.0..=1.0)
    pub v: f64,
}

impl Hsv {
    /// Create an HSV color, normalizing hue into [0, 1) and clamping
    /// saturation and value into [0, 1].
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(1.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Rotate the hue by `delta` turns, wrapping around the color wheel.
    /// Saturation and value are unchanged.
    #[inline]
    pub fn rotate_hue(self, delta: f64) -> Self {
        Self {
            h: (self.h + delta).rem_euclid(1.0),
            ..self
        }
    }

    /// Replace the value component, clamped to [0, 1].
    #[inline]
    pub fn with_value(self, v: f64) -> Self {
        Self {
            v: v.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to RGB using the standard sector algorithm.
    ///
    /// Float channels are truncated toward zero (`as u8`), not rounded.
    /// Truncation is load-bearing: harmony output and the round-trip
    /// tolerance tests depend on it bit-for-bit.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let sector = h * 6.0;
        let i = sector.floor();
        let f = sector - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (i as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        // `as u8` truncates toward zero; inputs are already in [0, 255]
        Rgb::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }
}

impl From<Rgb> for Hsv {
    /// Standard RGB -> HSV transform on channels normalized to [0, 1].
    ///
    /// The achromatic case (max == min) yields hue 0 and saturation 0.
    fn from(c: Rgb) -> Self {
        let r = c.r as f64 / 255.0;
        let g = c.g as f64 / 255.0;
        let b = c.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Self { h, s, v }
    }
}
