//! Harmony palette generation
//!
//! Derives related colors from a base color by rotating its hue around
//! the color wheel (and, for the monochromatic scheme, sweeping value).
//! Output order is canonical for presentation: the base color first,
//! then the derived swatches in hue-ascending offset order.
//!
//! Hue arithmetic is always modulo 1.0 turn. Every scheme except
//! monochromatic preserves the base color's saturation and value; every
//! derived swatch goes through exactly one HSV -> RGB conversion, which
//! truncates (see [`Hsv::to_rgb`]).

use crate::color::{Hsv, Rgb};

/// One step on the classic 30-degree color wheel, as a fraction of a turn.
const WHEEL_STEP: f64 = 30.0 / 360.0;

/// Lower bound for swept values in the monochromatic scheme. Keeps the
/// darkest swatch distinguishable from pure black.
const MONO_VALUE_FLOOR: f64 = 0.1;

/// Harmony scheme: a fixed pattern of hue (and sometimes value) offsets.
///
/// The set is closed; user-facing mode strings are mapped to this enum at
/// the input boundary, so an unrecognized scheme never reaches
/// [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarmonyScheme {
    /// Same hue and saturation, value swept around the base value.
    /// Takes a count in 3..=7 (default 5).
    #[default]
    Monochromatic,

    /// Base plus its opposite on the wheel (hue + 0.5).
    Complementary,

    /// Base plus neighbors at 30-degree steps. Takes a count in 3..=5
    /// (default 3, i.e. base ± one step).
    Analogous,

    /// Base plus hues at +1/3 and +2/3 turn.
    Triadic,

    /// Base plus the two hues flanking its complement at ±30 degrees.
    SplitComplementary,

    /// Four hues evenly spaced a quarter turn apart.
    Square,

    /// Four hues forming two complementary pairs: base, +60, +180, +240
    /// degrees.
    Rectangular,
}

impl HarmonyScheme {
    /// All schemes, in presentation order.
    pub const ALL: [HarmonyScheme; 7] = [
        HarmonyScheme::Monochromatic,
        HarmonyScheme::Complementary,
        HarmonyScheme::Analogous,
        HarmonyScheme::Triadic,
        HarmonyScheme::SplitComplementary,
        HarmonyScheme::Square,
        HarmonyScheme::Rectangular,
    ];

    /// Stable lowercase name for display and CLI round trips.
    pub fn name(self) -> &'static str {
        match self {
            HarmonyScheme::Monochromatic => "monochromatic",
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::SplitComplementary => "split-complementary",
            HarmonyScheme::Square => "square",
            HarmonyScheme::Rectangular => "rectangular",
        }
    }

    /// The (min, max, default) swatch counts this scheme supports.
    /// Schemes with a fixed shape report the same number three times.
    pub fn count_bounds(self) -> (usize, usize, usize) {
        match self {
            HarmonyScheme::Monochromatic => (3, 7, 5),
            HarmonyScheme::Complementary => (2, 2, 2),
            HarmonyScheme::Analogous => (3, 5, 3),
            HarmonyScheme::Triadic => (3, 3, 3),
            HarmonyScheme::SplitComplementary => (3, 3, 3),
            HarmonyScheme::Square => (4, 4, 4),
            HarmonyScheme::Rectangular => (4, 4, 4),
        }
    }
}

/// Generate a harmony palette from a base color.
///
/// Returns the base color first (unchanged, no HSV round trip), then the
/// derived swatches. `count` applies only to the monochromatic and
/// analogous schemes; it is clamped to the scheme's supported range, and
/// `None` selects the scheme's default.
///
/// # Example
///
/// ```
/// use color_engine::{generate, HarmonyScheme, Rgb};
///
/// let base = Rgb::new(255, 0, 0);
/// let palette = generate(base, HarmonyScheme::Square, None);
/// assert_eq!(palette.len(), 4);
/// assert_eq!(palette[0], base);
/// ```
pub fn generate(base: Rgb, scheme: HarmonyScheme, count: Option<usize>) -> Vec<Rgb> {
    let (min, max, default) = scheme.count_bounds();
    let count = count.unwrap_or(default).clamp(min, max);
    let hsv = Hsv::from(base);

    match scheme {
        HarmonyScheme::Monochromatic => monochromatic(base, hsv, count),
        HarmonyScheme::Complementary => from_offsets(base, hsv, &[0.5]),
        HarmonyScheme::Analogous => analogous(base, hsv, count),
        HarmonyScheme::Triadic => from_offsets(base, hsv, &[1.0 / 3.0, 2.0 / 3.0]),
        HarmonyScheme::SplitComplementary => {
            from_offsets(base, hsv, &[0.5 - WHEEL_STEP, 0.5 + WHEEL_STEP])
        }
        HarmonyScheme::Square => from_offsets(base, hsv, &[0.25, 0.5, 0.75]),
        HarmonyScheme::Rectangular => {
            from_offsets(base, hsv, &[2.0 * WHEEL_STEP, 0.5, 0.5 + 2.0 * WHEEL_STEP])
        }
    }
}

/// Base followed by hue rotations, offsets pre-sorted ascending.
fn from_offsets(base: Rgb, hsv: Hsv, offsets: &[f64]) -> Vec<Rgb> {
    let mut palette = Vec::with_capacity(offsets.len() + 1);
    palette.push(base);
    palette.extend(offsets.iter().map(|&off| hsv.rotate_hue(off).to_rgb()));
    palette
}

/// Base followed by `count - 1` evenly spaced values across a window
/// anchored near the base value: [max(0.1, v-0.4), min(1.0, v+0.2)].
fn monochromatic(base: Rgb, hsv: Hsv, count: usize) -> Vec<Rgb> {
    let lo = (hsv.v - 0.4).max(MONO_VALUE_FLOOR);
    let hi = (hsv.v + 0.2).min(1.0);
    let steps = count - 1;

    let mut palette = Vec::with_capacity(count);
    palette.push(base);
    for i in 0..steps {
        let v = lo + (hi - lo) * i as f64 / (steps - 1) as f64;
        palette.push(hsv.with_value(v.clamp(MONO_VALUE_FLOOR, 1.0)).to_rgb());
    }
    palette
}

/// Base followed by 30-degree neighbors, added outward alternating sides:
/// count 3 -> ±1 step, count 4 -> -1,+1,+2 steps, count 5 -> ±1,±2 steps.
/// Offsets are emitted in ascending signed order.
fn analogous(base: Rgb, hsv: Hsv, count: usize) -> Vec<Rgb> {
    let steps: &[f64] = match count {
        3 => &[-1.0, 1.0],
        4 => &[-1.0, 1.0, 2.0],
        _ => &[-2.0, -1.0, 1.0, 2.0],
    };
    let offsets: Vec<f64> = steps.iter().map(|s| s * WHEEL_STEP).collect();
    from_offsets(base, hsv, &offsets)
}
