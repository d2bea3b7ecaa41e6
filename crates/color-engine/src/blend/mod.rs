//! Color compositing
//!
//! Combines two RGB colors under a named blend law. All formulas run on
//! per-channel integer math with truncating division, matching the
//! behavior swatch outputs were tuned against; results pass through
//! [`Rgb::from_clamped`] before leaving the module.

use crate::color::Rgb;

/// Blend law applied per channel by [`composite`].
///
/// The set is closed: an unrecognized mode cannot reach the compositor,
/// it has to be rejected wherever user input is mapped to this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Linear interpolation between the two colors, weighted by `ratio`.
    #[default]
    Normal,

    /// `c1 * c2 / 255` — darkens; white is the identity.
    Multiply,

    /// `255 - (255-c1) * (255-c2) / 255` — lightens; black is the identity.
    Screen,

    /// Multiply in the shadows, screen in the highlights.
    ///
    /// The branch is chosen by the **base** (first) color's channel: below
    /// 128 the multiply arm applies, otherwise the screen arm. The base
    /// color acts as the backdrop, which is what overlay is defined on.
    Overlay,
}

impl BlendMode {
    /// All modes, in presentation order.
    pub const ALL: [BlendMode; 4] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
    ];

    /// Stable lowercase name for display and CLI round trips.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
        }
    }
}

/// Composite two colors under a blend law.
///
/// `ratio` is clamped to [0, 1] and only affects [`BlendMode::Normal`];
/// the other laws have no ratio term (layer one with [`linear_mix`] if a
/// partial application is wanted). Division truncates, and every result
/// channel is re-clamped to 0..=255.
///
/// # Example
///
/// ```
/// use color_engine::{composite, BlendMode, Rgb};
///
/// let red = Rgb::new(255, 0, 0);
/// let blue = Rgb::new(0, 0, 255);
/// let mixed = composite(red, blue, BlendMode::Normal, 0.5);
/// assert_eq!(mixed, Rgb::new(127, 0, 127));
/// ```
pub fn composite(a: Rgb, b: Rgb, mode: BlendMode, ratio: f64) -> Rgb {
    let ratio = ratio.clamp(0.0, 1.0);
    let mut out = [0i32; 3];
    for (i, (&c1, &c2)) in a.to_bytes().iter().zip(b.to_bytes().iter()).enumerate() {
        let c1 = c1 as i32;
        let c2 = c2 as i32;
        out[i] = match mode {
            // Truncate the float lerp, matching the integer laws below
            BlendMode::Normal => (c1 as f64 * (1.0 - ratio) + c2 as f64 * ratio) as i32,
            BlendMode::Multiply => c1 * c2 / 255,
            BlendMode::Screen => 255 - (255 - c1) * (255 - c2) / 255,
            BlendMode::Overlay => {
                if c1 < 128 {
                    2 * c1 * c2 / 255
                } else {
                    255 - 2 * (255 - c1) * (255 - c2) / 255
                }
            }
        };
    }
    Rgb::from_clamped(out[0], out[1], out[2])
}

/// Linearly mix two colors: `a*(1-ratio) + b*ratio`, truncated.
///
/// The distinct "blend strength" operation the UI layers on top of a
/// composite result (e.g. 70% of the multiply output over the original).
/// `ratio` is clamped to [0, 1].
pub fn linear_mix(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
    composite(a, b, BlendMode::Normal, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normal_half_mix_truncates() {
        let c = composite(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), BlendMode::Normal, 0.5);
        assert_eq!(c, Rgb::new(127, 0, 127));
    }

    #[test]
    fn test_normal_ratio_extremes() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(composite(a, b, BlendMode::Normal, 0.0), a);
        assert_eq!(composite(a, b, BlendMode::Normal, 1.0), b);
    }

    #[test]
    fn test_out_of_range_ratio_is_clamped() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(
            composite(a, b, BlendMode::Normal, -3.0),
            composite(a, b, BlendMode::Normal, 0.0)
        );
        assert_eq!(
            composite(a, b, BlendMode::Normal, 7.5),
            composite(a, b, BlendMode::Normal, 1.0)
        );
    }

    #[test]
    fn test_multiply_identities() {
        let any = Rgb::new(37, 142, 250);
        assert_eq!(composite(Rgb::WHITE, Rgb::BLACK, BlendMode::Multiply, 0.5), Rgb::BLACK);
        assert_eq!(composite(any, Rgb::WHITE, BlendMode::Multiply, 0.5), any);
        assert_eq!(composite(any, Rgb::BLACK, BlendMode::Multiply, 0.5), Rgb::BLACK);
    }

    #[test]
    fn test_screen_identities() {
        let any = Rgb::new(37, 142, 250);
        assert_eq!(composite(Rgb::BLACK, Rgb::BLACK, BlendMode::Screen, 0.5), Rgb::BLACK);
        assert_eq!(composite(any, Rgb::BLACK, BlendMode::Screen, 0.5), any);
        assert_eq!(composite(any, Rgb::WHITE, BlendMode::Screen, 0.5), Rgb::WHITE);
    }

    #[test]
    fn test_multiply_truncates() {
        // 100 * 100 / 255 = 39.21 -> 39
        let c = composite(Rgb::new(100, 100, 100), Rgb::new(100, 100, 100), BlendMode::Multiply, 0.5);
        assert_eq!(c, Rgb::new(39, 39, 39));
    }

    #[test]
    fn test_ratio_ignored_by_non_normal_modes() {
        let a = Rgb::new(64, 160, 8);
        let b = Rgb::new(91, 33, 240);
        for mode in [BlendMode::Multiply, BlendMode::Screen, BlendMode::Overlay] {
            assert_eq!(
                composite(a, b, mode, 0.1),
                composite(a, b, mode, 0.9),
                "{mode:?}"
            );
        }
    }

    #[test]
    fn test_linear_mix_matches_normal() {
        let a = Rgb::new(5, 100, 250);
        let b = Rgb::new(250, 100, 5);
        assert_eq!(linear_mix(a, b, 0.25), composite(a, b, BlendMode::Normal, 0.25));
    }
}
